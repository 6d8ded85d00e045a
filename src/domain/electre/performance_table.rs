//! Performance Table - Scores of every action on every criterion.

use serde::Serialize;
use std::collections::{HashMap, HashSet};

use crate::domain::foundation::ValidationError;

use super::{Criteria, ElectreError};

/// The performance table mapping actions x criteria to scores.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PerformanceTable {
    /// Ordered list of action IDs.
    pub action_ids: Vec<String>,
    /// Scores keyed by action, then by criterion.
    pub scores: HashMap<String, HashMap<String, f64>>,
}

impl PerformanceTable {
    /// Creates a builder for constructing a performance table.
    pub fn builder() -> PerformanceTableBuilder {
        PerformanceTableBuilder::new()
    }

    /// Gets the score of an action on a criterion.
    pub fn score(&self, action_id: &str, criterion_id: &str) -> Result<f64, ElectreError> {
        self.scores
            .get(action_id)
            .and_then(|row| row.get(criterion_id))
            .copied()
            .ok_or_else(|| ElectreError::missing_performance(action_id, criterion_id))
    }

    /// Checks that every action is unique and scored finitely on every criterion.
    pub fn validate_against(&self, criteria: &Criteria) -> Result<(), ElectreError> {
        if self.action_ids.is_empty() {
            return Err(ElectreError::EmptyProblem("actions"));
        }

        let mut seen = HashSet::new();
        for action_id in &self.action_ids {
            if action_id.trim().is_empty() {
                return Err(ValidationError::empty_field("action").into());
            }
            if !seen.insert(action_id.as_str()) {
                return Err(ElectreError::DuplicateEntry {
                    kind: "action",
                    id: action_id.clone(),
                });
            }
            for criterion in criteria.iter() {
                let score = self.score(action_id, &criterion.id)?;
                ValidationError::ensure_finite(
                    &format!("performance of '{}' on '{}'", action_id, criterion.id),
                    score,
                )?;
            }
        }
        Ok(())
    }

    /// Returns true if the table has no actions.
    pub fn is_empty(&self) -> bool {
        self.action_ids.is_empty()
    }

    /// Returns the number of actions.
    pub fn action_count(&self) -> usize {
        self.action_ids.len()
    }
}

/// Builder for constructing PerformanceTable instances.
#[derive(Debug, Default)]
pub struct PerformanceTableBuilder {
    action_ids: Vec<String>,
    scores: HashMap<String, HashMap<String, f64>>,
}

impl PerformanceTableBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the actions.
    pub fn actions(mut self, ids: Vec<impl Into<String>>) -> Self {
        self.action_ids = ids.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Records the score of an action on a criterion.
    pub fn score(
        mut self,
        action_id: impl Into<String>,
        criterion_id: impl Into<String>,
        value: f64,
    ) -> Self {
        self.scores
            .entry(action_id.into())
            .or_default()
            .insert(criterion_id.into(), value);
        self
    }

    /// Records a full row of scores, paired with criteria in order.
    pub fn row(mut self, action_id: impl Into<String>, criteria: &[&str], values: &[f64]) -> Self {
        let row = self.scores.entry(action_id.into()).or_default();
        for (criterion, value) in criteria.iter().zip(values) {
            row.insert((*criterion).to_string(), *value);
        }
        self
    }

    /// Builds the performance table.
    pub fn build(self) -> PerformanceTable {
        PerformanceTable {
            action_ids: self.action_ids,
            scores: self.scores,
        }
    }
}
