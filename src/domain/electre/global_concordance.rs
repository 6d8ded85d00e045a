//! Global Concordance Aggregator - Weighted blend of partial concordances.

use serde::Serialize;

use crate::domain::foundation::UnitInterval;

use super::{
    ActionTable, Boundary, ConcordanceMatrix, Criteria, Direction, Directional, ElectreError,
};

/// One global concordance per action and direction, for one boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobalConcordance {
    pub boundary: Boundary,
    pub values: Directional<ActionTable<UnitInterval>>,
}

impl GlobalConcordance {
    /// Returns the global concordance of an action in one direction.
    pub fn value(&self, direction: Direction, action: &str) -> Result<UnitInterval, ElectreError> {
        self.values.get(direction).require(action).copied()
    }
}

/// Aggregates partial concordances into a single strength of outranking.
pub struct GlobalConcordanceAggregator;

impl GlobalConcordanceAggregator {
    /// Computes `GC(i) = Σ_j (w_j / Σw) · c(i, j)` for each action and direction.
    ///
    /// # Errors
    /// - `InvalidWeights` if the total weight is not positive
    /// - `MissingEntry` if a matrix column has no weight
    pub fn aggregate(
        concordance: &ConcordanceMatrix,
        criteria: &Criteria,
    ) -> Result<GlobalConcordance, ElectreError> {
        if criteria.total_weight() <= 0.0 {
            return Err(ElectreError::InvalidWeights {
                reason: format!(
                    "total weight must be positive, got {}",
                    criteria.total_weight()
                ),
            });
        }

        let weights = concordance
            .criteria
            .iter()
            .map(|criterion| criteria.normalized_weight(criterion))
            .collect::<Result<Vec<_>, _>>()?;

        let values = Directional::try_from_fn(|direction| {
            concordance.rows.get(direction).try_map(|_, row| {
                let weighted: f64 = row
                    .iter()
                    .zip(&weights)
                    .map(|(c, w)| c.value() * w)
                    .sum();
                Ok::<_, ElectreError>(UnitInterval::clamped(weighted))
            })
        })?;

        Ok(GlobalConcordance {
            boundary: concordance.boundary,
            values,
        })
    }
}
