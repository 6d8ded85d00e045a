//! Sorting Problem - The validated input bundle of one run.

use serde::Serialize;

use super::{Criteria, ElectreError, PerformanceTable, ProfileSet};

/// Criteria, performances and profiles, checked for mutual completeness.
///
/// Once built, every lookup the pipeline performs is known to succeed,
/// and the instance is never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SortingProblem {
    criteria: Criteria,
    performances: PerformanceTable,
    profiles: ProfileSet,
}

impl SortingProblem {
    /// Validates and bundles the inputs.
    ///
    /// # Errors
    /// - `EmptyProblem` / `DuplicateEntry` on the action list
    /// - `MissingEntry` for any unscored action or uncovered criterion
    pub fn new(
        criteria: Criteria,
        performances: PerformanceTable,
        profiles: ProfileSet,
    ) -> Result<Self, ElectreError> {
        profiles.validate_against(&criteria)?;
        performances.validate_against(&criteria)?;

        Ok(Self {
            criteria,
            performances,
            profiles,
        })
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn performances(&self) -> &PerformanceTable {
        &self.performances
    }

    pub fn profiles(&self) -> &ProfileSet {
        &self.profiles
    }

    /// Action ids in input order.
    pub fn action_ids(&self) -> &[String] {
        &self.performances.action_ids
    }
}
