//! Criteria - Ordered evaluation axes with their weights.

use serde::Serialize;
use std::collections::{HashMap, HashSet};

use crate::domain::foundation::ValidationError;

use super::ElectreError;

/// A single evaluation axis. Higher performance is always better.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Criterion {
    pub id: String,
    pub weight: f64,
}

/// The ordered criteria of a sorting problem.
///
/// Order defines the column order of every per-criterion matrix.
/// Construction guarantees that every weight is finite and non-negative
/// and that the total weight is strictly positive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Criteria {
    criteria: Vec<Criterion>,
    total_weight: f64,
}

impl Criteria {
    /// Creates the criteria from an ordered id list and a weight map.
    ///
    /// # Errors
    /// - `EmptyProblem` when no criterion is given
    /// - `DuplicateEntry` when an id repeats
    /// - `MissingEntry` when an id has no weight
    /// - `InvalidWeights` on a negative or non-finite weight, or a total ≤ 0
    pub fn new(
        ids: Vec<impl Into<String>>,
        weights: &HashMap<String, f64>,
    ) -> Result<Self, ElectreError> {
        let pairs = ids
            .into_iter()
            .map(|id| {
                let id = id.into();
                let weight = weights
                    .get(&id)
                    .copied()
                    .ok_or_else(|| ElectreError::missing_weight(id.as_str()))?;
                Ok((id, weight))
            })
            .collect::<Result<Vec<_>, ElectreError>>()?;
        Self::from_pairs(pairs)
    }

    /// Creates the criteria from ordered `(id, weight)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, ElectreError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut criteria = Vec::new();

        for (id, weight) in pairs {
            let id = id.into();
            if id.trim().is_empty() {
                return Err(ValidationError::empty_field("criterion").into());
            }
            if !seen.insert(id.clone()) {
                return Err(ElectreError::DuplicateEntry {
                    kind: "criterion",
                    id,
                });
            }
            if !weight.is_finite() || weight < 0.0 {
                return Err(ElectreError::InvalidWeights {
                    reason: format!("criterion '{}' has weight {}", id, weight),
                });
            }
            criteria.push(Criterion { id, weight });
        }

        if criteria.is_empty() {
            return Err(ElectreError::EmptyProblem("criteria"));
        }

        let total_weight: f64 = criteria.iter().map(|c| c.weight).sum();
        if total_weight <= 0.0 {
            return Err(ElectreError::InvalidWeights {
                reason: format!("total weight must be positive, got {}", total_weight),
            });
        }

        Ok(Self {
            criteria,
            total_weight,
        })
    }

    /// Iterates criteria in column order.
    pub fn iter(&self) -> impl Iterator<Item = &Criterion> {
        self.criteria.iter()
    }

    /// Criterion ids in column order.
    pub fn ids(&self) -> Vec<&str> {
        self.criteria.iter().map(|c| c.id.as_str()).collect()
    }

    /// Sum of all weights, always positive.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Weight of a criterion divided by the total weight.
    pub fn normalized_weight(&self, criterion: &str) -> Result<f64, ElectreError> {
        self.criteria
            .iter()
            .find(|c| c.id == criterion)
            .map(|c| c.weight / self.total_weight)
            .ok_or_else(|| ElectreError::missing_weight(criterion))
    }

    /// Returns the number of criteria.
    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    /// Always false; construction rejects empty criteria.
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    fn weights(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn criteria_keep_input_order() {
        let criteria = Criteria::new(
            vec!["cost", "energy", "comfort"],
            &weights(&[("comfort", 1.0), ("cost", 2.0), ("energy", 3.0)]),
        )
        .unwrap();

        assert_eq!(criteria.ids(), vec!["cost", "energy", "comfort"]);
        assert_eq!(criteria.total_weight(), 6.0);
    }

    #[test]
    fn criteria_normalized_weight_divides_by_total() {
        let criteria = Criteria::from_pairs(vec![("a", 1.0), ("b", 3.0)]).unwrap();
        assert_eq!(criteria.normalized_weight("a").unwrap(), 0.25);
        assert_eq!(criteria.normalized_weight("b").unwrap(), 0.75);
    }

    #[test]
    fn criteria_allow_zero_individual_weight() {
        let criteria = Criteria::from_pairs(vec![("a", 0.0), ("b", 1.0)]).unwrap();
        assert_eq!(criteria.normalized_weight("a").unwrap(), 0.0);
    }

    #[test]
    fn criteria_missing_weight_is_missing_entry() {
        let err = Criteria::new(vec!["a", "b"], &weights(&[("a", 1.0)])).unwrap_err();
        assert_eq!(err, ElectreError::missing_weight("b"));
    }

    #[test]
    fn criteria_reject_negative_weight() {
        let err = Criteria::from_pairs(vec![("a", 2.0), ("b", -1.0)]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidWeights);
        assert!(err.to_string().contains("'b'"));
    }

    #[test]
    fn criteria_reject_zero_total_weight() {
        let err = Criteria::from_pairs(vec![("a", 0.0), ("b", 0.0)]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidWeights);
    }

    #[test]
    fn criteria_reject_nan_weight() {
        let err = Criteria::from_pairs(vec![("a", f64::NAN)]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidWeights);
    }

    #[test]
    fn criteria_reject_duplicates() {
        let err = Criteria::from_pairs(vec![("a", 1.0), ("a", 2.0)]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::DuplicateEntry);
    }

    #[test]
    fn criteria_reject_empty_list() {
        let err = Criteria::from_pairs(Vec::<(&str, f64)>::new()).unwrap_err();
        assert_eq!(err, ElectreError::EmptyProblem("criteria"));
    }
}
