//! Per-criterion index matrices shared by the concordance and discordance builders.

use serde::Serialize;

use crate::domain::foundation::UnitInterval;

use super::{
    ActionTable, Boundary, Direction, Directional, ElectreError, SortingProblem, Thresholds,
};

/// One row of partial indices per action, one column per criterion, for each direction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionMatrix {
    pub boundary: Boundary,
    /// Column labels, in criteria order.
    pub criteria: Vec<String>,
    pub rows: Directional<ActionTable<Vec<UnitInterval>>>,
}

impl CriterionMatrix {
    /// Evaluates `index` for every action, criterion and direction against one boundary.
    ///
    /// `index` receives the signed advantage of the asserted outranker
    /// (`g(ai) - g(bk)` or `g(bk) - g(ai)`) and the criterion's thresholds.
    pub(crate) fn compute(
        problem: &SortingProblem,
        boundary: Boundary,
        index: impl Fn(f64, &Thresholds) -> UnitInterval,
    ) -> Result<Self, ElectreError> {
        let criteria = problem.criteria();
        let profile = problem.profiles().profile(boundary);

        let rows = Directional::try_from_fn(|direction| {
            let mut table = ActionTable::new();
            for action in problem.action_ids() {
                let row = criteria
                    .iter()
                    .map(|criterion| -> Result<UnitInterval, ElectreError> {
                        let thresholds = profile.thresholds(&criterion.id)?;
                        let score = problem.performances().score(action, &criterion.id)?;
                        let advantage = direction.advantage(score, thresholds.profile());
                        Ok(index(advantage, thresholds))
                    })
                    .collect::<Result<Vec<_>, ElectreError>>()?;
                table.insert(action.as_str(), row);
            }
            Ok::<_, ElectreError>(table)
        })?;

        Ok(Self {
            boundary,
            criteria: criteria.iter().map(|c| c.id.clone()).collect(),
            rows,
        })
    }

    /// Returns the row of an action in one direction.
    pub fn row(&self, direction: Direction, action: &str) -> Result<&[UnitInterval], ElectreError> {
        self.rows
            .get(direction)
            .require(action)
            .map(|row| row.as_slice())
    }

    /// Returns a single entry, if the action and criterion exist.
    pub fn entry(&self, direction: Direction, action: &str, criterion: &str) -> Option<UnitInterval> {
        let column = self.criteria.iter().position(|c| c == criterion)?;
        self.rows
            .get(direction)
            .get(action)
            .and_then(|row| row.get(column))
            .copied()
    }
}
