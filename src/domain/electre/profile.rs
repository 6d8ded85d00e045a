//! Reference profiles ("boundaries") and their per-criterion thresholds.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::domain::foundation::ValidationError;

use super::{Criteria, ElectreError};

/// The two reference profiles separating the three categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Boundary {
    /// Lower profile, between Bad and Moderate.
    Moderate,
    /// Upper profile, between Moderate and Good.
    Good,
}

impl Boundary {
    /// Both boundaries, bottom first.
    pub const ALL: [Boundary; 2] = [Boundary::Moderate, Boundary::Good];

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Boundary::Moderate => "Moderate",
            Boundary::Good => "Good",
        }
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Profile value and discrimination thresholds for one criterion.
///
/// Only constructible through [`Thresholds::new`], which enforces q < p < v.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Thresholds {
    profile: f64,
    indifference: f64,
    preference: f64,
    veto: f64,
}

impl Thresholds {
    /// Creates a threshold tuple `(g, q, p, v)`.
    pub fn new(
        profile: f64,
        indifference: f64,
        preference: f64,
        veto: f64,
    ) -> Result<Self, ValidationError> {
        ValidationError::ensure_finite("profile value", profile)?;
        ValidationError::ensure_finite("indifference threshold", indifference)?;
        ValidationError::ensure_finite("preference threshold", preference)?;
        ValidationError::ensure_finite("veto threshold", veto)?;

        if !(indifference < preference && preference < veto) {
            return Err(ValidationError::UnorderedThresholds {
                indifference,
                preference,
                veto,
            });
        }

        Ok(Self {
            profile,
            indifference,
            preference,
            veto,
        })
    }

    /// Profile value `g(bk)`.
    pub fn profile(&self) -> f64 {
        self.profile
    }

    /// Indifference threshold `q`.
    pub fn indifference(&self) -> f64 {
        self.indifference
    }

    /// Preference threshold `p`.
    pub fn preference(&self) -> f64 {
        self.preference
    }

    /// Veto threshold `v`.
    pub fn veto(&self) -> f64 {
        self.veto
    }
}

/// A boundary together with its thresholds on each criterion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceProfile {
    pub boundary: Boundary,
    thresholds: HashMap<String, Thresholds>,
}

impl ReferenceProfile {
    /// Creates a profile with no thresholds yet.
    pub fn new(boundary: Boundary) -> Self {
        Self {
            boundary,
            thresholds: HashMap::new(),
        }
    }

    /// Validates and records the thresholds of one criterion.
    pub fn insert(
        &mut self,
        criterion: impl Into<String>,
        profile: f64,
        indifference: f64,
        preference: f64,
        veto: f64,
    ) -> Result<(), ElectreError> {
        let criterion = criterion.into();
        if self.thresholds.contains_key(&criterion) {
            return Err(ElectreError::DuplicateEntry {
                kind: match self.boundary {
                    Boundary::Moderate => "Moderate threshold",
                    Boundary::Good => "Good threshold",
                },
                id: criterion,
            });
        }
        let thresholds = Thresholds::new(profile, indifference, preference, veto).map_err(
            |source| ElectreError::InvalidThresholds {
                boundary: self.boundary,
                criterion: criterion.clone(),
                source,
            },
        )?;
        self.thresholds.insert(criterion, thresholds);
        Ok(())
    }

    /// Returns the thresholds of a criterion.
    pub fn thresholds(&self, criterion: &str) -> Result<&Thresholds, ElectreError> {
        self.thresholds
            .get(criterion)
            .ok_or_else(|| ElectreError::missing_threshold(self.boundary, criterion))
    }

    /// Checks that every criterion has thresholds.
    pub fn validate_against(&self, criteria: &Criteria) -> Result<(), ElectreError> {
        for criterion in criteria.iter() {
            self.thresholds(&criterion.id)?;
        }
        Ok(())
    }
}

/// The Moderate and Good profiles of a sorting problem.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSet {
    moderate: ReferenceProfile,
    good: ReferenceProfile,
}

impl ProfileSet {
    /// Creates a set with two empty profiles.
    pub fn new() -> Self {
        Self {
            moderate: ReferenceProfile::new(Boundary::Moderate),
            good: ReferenceProfile::new(Boundary::Good),
        }
    }

    /// Validates and records one threshold tuple.
    pub fn insert(
        &mut self,
        boundary: Boundary,
        criterion: impl Into<String>,
        profile: f64,
        indifference: f64,
        preference: f64,
        veto: f64,
    ) -> Result<(), ElectreError> {
        self.profile_mut(boundary)
            .insert(criterion, profile, indifference, preference, veto)
    }

    /// Chaining variant of [`ProfileSet::insert`].
    pub fn with(
        mut self,
        boundary: Boundary,
        criterion: impl Into<String>,
        thresholds: (f64, f64, f64, f64),
    ) -> Result<Self, ElectreError> {
        let (g, q, p, v) = thresholds;
        self.insert(boundary, criterion, g, q, p, v)?;
        Ok(self)
    }

    /// Returns the profile of a boundary.
    pub fn profile(&self, boundary: Boundary) -> &ReferenceProfile {
        match boundary {
            Boundary::Moderate => &self.moderate,
            Boundary::Good => &self.good,
        }
    }

    fn profile_mut(&mut self, boundary: Boundary) -> &mut ReferenceProfile {
        match boundary {
            Boundary::Moderate => &mut self.moderate,
            Boundary::Good => &mut self.good,
        }
    }

    /// Checks that both profiles cover every criterion.
    pub fn validate_against(&self, criteria: &Criteria) -> Result<(), ElectreError> {
        self.moderate.validate_against(criteria)?;
        self.good.validate_against(criteria)
    }
}

impl Default for ProfileSet {
    fn default() -> Self {
        Self::new()
    }
}
