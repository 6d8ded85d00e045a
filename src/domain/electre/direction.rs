//! Comparison directions between an action and a boundary.

use serde::Serialize;
use std::fmt;

/// Which side is asserted to outrank the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// The action outranks the boundary, written `(ai,bk)`.
    ActionOverProfile,
    /// The boundary outranks the action, written `(bk,ai)`.
    ProfileOverAction,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::ActionOverProfile, Direction::ProfileOverAction];

    /// Conventional pair notation.
    pub fn notation(&self) -> &'static str {
        match self {
            Direction::ActionOverProfile => "(ai,bk)",
            Direction::ProfileOverAction => "(bk,ai)",
        }
    }

    /// Signed margin by which the asserted outranker beats the other side.
    pub fn advantage(&self, action_score: f64, profile_value: f64) -> f64 {
        match self {
            Direction::ActionOverProfile => action_score - profile_value,
            Direction::ProfileOverAction => profile_value - action_score,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notation())
    }
}

/// One value per direction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Directional<T> {
    pub action_over_profile: T,
    pub profile_over_action: T,
}

impl<T> Directional<T> {
    /// Builds both sides from a per-direction constructor.
    pub fn try_from_fn<E>(mut f: impl FnMut(Direction) -> Result<T, E>) -> Result<Self, E> {
        Ok(Self {
            action_over_profile: f(Direction::ActionOverProfile)?,
            profile_over_action: f(Direction::ProfileOverAction)?,
        })
    }

    /// Returns the side for a direction.
    pub fn get(&self, direction: Direction) -> &T {
        match direction {
            Direction::ActionOverProfile => &self.action_over_profile,
            Direction::ProfileOverAction => &self.profile_over_action,
        }
    }
}
