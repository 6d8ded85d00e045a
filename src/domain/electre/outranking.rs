//! Outranking Relation Builder - λ-cut of credibility pairs.

use serde::Serialize;
use std::fmt;
use tracing::warn;

use crate::domain::foundation::UnitInterval;

use super::{ActionTable, Boundary, Credibility, Direction, ElectreError};

/// Lower end of the recommended λ range (exclusive).
pub const RECOMMENDED_LAMBDA_FLOOR: f64 = 0.5;

/// Minimum credibility required to assert an outranking, in (0, 1].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct CuttingThreshold(f64);

impl CuttingThreshold {
    /// Creates a cutting threshold.
    ///
    /// Values in (0, 0.5] are accepted with a warning; they make
    /// "outranks" weaker than a coin flip.
    pub fn new(lambda: f64) -> Result<Self, ElectreError> {
        if !(lambda > 0.0 && lambda <= 1.0) {
            return Err(ElectreError::InvalidCuttingThreshold { lambda });
        }
        if lambda <= RECOMMENDED_LAMBDA_FLOOR {
            warn!(lambda, "cutting threshold is below the recommended range (0.5, 1]");
        }
        Ok(Self(lambda))
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// True if a credibility clears the cut.
    pub fn admits(&self, credibility: UnitInterval) -> bool {
        credibility.value() >= self.0
    }
}

impl fmt::Display for CuttingThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of comparing an action with a boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    /// The action outranks the boundary, not conversely.
    Preferred,
    /// The boundary outranks the action, not conversely.
    Inverse,
    /// Each outranks the other.
    Indifferent,
    /// Neither outranks the other.
    Incomparable,
}

impl Relation {
    /// Classifies a credibility pair `(cr(ai,bk), cr(bk,ai))` under a cut.
    pub fn from_credibility(
        action_over_profile: UnitInterval,
        profile_over_action: UnitInterval,
        lambda: CuttingThreshold,
    ) -> Self {
        match (
            lambda.admits(action_over_profile),
            lambda.admits(profile_over_action),
        ) {
            (true, true) => Relation::Indifferent,
            (true, false) => Relation::Preferred,
            (false, true) => Relation::Inverse,
            (false, false) => Relation::Incomparable,
        }
    }

    /// Conventional one-character symbol.
    pub fn symbol(&self) -> char {
        match self {
            Relation::Preferred => '>',
            Relation::Inverse => '<',
            Relation::Indifferent => 'I',
            Relation::Incomparable => 'R',
        }
    }

    /// True if the action is at least as good as the boundary.
    pub fn action_outranks(&self) -> bool {
        matches!(self, Relation::Preferred | Relation::Indifferent)
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The four limits an action is compared with, bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ProfileLevel {
    /// Hypothetical profile below the worst performance.
    Floor,
    Moderate,
    Good,
    /// Hypothetical profile above the best performance.
    Roof,
}

impl ProfileLevel {
    pub const ALL: [ProfileLevel; 4] = [
        ProfileLevel::Floor,
        ProfileLevel::Moderate,
        ProfileLevel::Good,
        ProfileLevel::Roof,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileLevel::Floor => "Floor",
            ProfileLevel::Moderate => "Moderate",
            ProfileLevel::Good => "Good",
            ProfileLevel::Roof => "Roof",
        }
    }
}

impl From<Boundary> for ProfileLevel {
    fn from(boundary: Boundary) -> Self {
        match boundary {
            Boundary::Moderate => ProfileLevel::Moderate,
            Boundary::Good => ProfileLevel::Good,
        }
    }
}

/// Relations of one action with the four limits.
///
/// Floor and Roof are fixed; only the two real boundaries are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RelationRow {
    pub moderate: Relation,
    pub good: Relation,
}

impl RelationRow {
    /// Returns the relation with a limit.
    pub fn get(&self, level: ProfileLevel) -> Relation {
        match level {
            ProfileLevel::Floor => Relation::Preferred,
            ProfileLevel::Moderate => self.moderate,
            ProfileLevel::Good => self.good,
            ProfileLevel::Roof => Relation::Inverse,
        }
    }
}

/// Outranking relations of every action.
#[derive(Debug, Clone, PartialEq)]
pub struct OutrankingRelations {
    pub cutting_threshold: CuttingThreshold,
    pub rows: ActionTable<RelationRow>,
}

impl OutrankingRelations {
    /// Returns the relation vector of one limit, in action order.
    pub fn column(&self, level: ProfileLevel) -> Vec<(&str, Relation)> {
        self.rows
            .iter()
            .map(|(action, row)| (action, row.get(level)))
            .collect()
    }

    /// Returns the relations of one action.
    pub fn row(&self, action: &str) -> Result<&RelationRow, ElectreError> {
        self.rows.require(action)
    }
}

impl Serialize for OutrankingRelations {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(ProfileLevel::ALL.len()))?;
        for level in ProfileLevel::ALL {
            let column: ActionTable<Relation> = self.column(level).into_iter().collect();
            map.serialize_entry(level.label(), &column)?;
        }
        map.end()
    }
}

/// Derives outranking relations from credibility.
pub struct OutrankingRelationBuilder;

impl OutrankingRelationBuilder {
    /// Applies the λ-cut to both boundaries' credibility pairs.
    ///
    /// Rows follow the action order of the Moderate credibility.
    pub fn build(
        moderate: &Credibility,
        good: &Credibility,
        cutting_threshold: CuttingThreshold,
    ) -> Result<OutrankingRelations, ElectreError> {
        let classify = |credibility: &Credibility, action: &str| -> Result<Relation, ElectreError> {
            Ok(Relation::from_credibility(
                credibility.value(Direction::ActionOverProfile, action)?,
                credibility.value(Direction::ProfileOverAction, action)?,
                cutting_threshold,
            ))
        };

        let rows = moderate
            .values
            .action_over_profile
            .try_map(|action, _| {
                Ok::<_, ElectreError>(RelationRow {
                    moderate: classify(moderate, action)?,
                    good: classify(good, action)?,
                })
            })?;

        Ok(OutrankingRelations {
            cutting_threshold,
            rows,
        })
    }
}
