//! Rank Reconciler - Median of the pessimistic and optimistic categories.

use serde::ser::{Serialize, Serializer};
use std::fmt;

use crate::domain::foundation::Category;

use super::{ActionTable, CategoryAssignment, ElectreError};

/// Midpoint of two category ordinals: one of 1, 1.5, 2, 2.5, 3.
///
/// Stored as the ordinal sum so the half steps stay exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MedianRank(u8);

impl MedianRank {
    /// Median of two categories.
    pub fn between(a: Category, b: Category) -> Self {
        Self(a.value() + b.value())
    }

    /// Returns the rank as a real number.
    pub fn value(&self) -> f64 {
        f64::from(self.0) / 2.0
    }
}

impl fmt::Display for MedianRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.value())
    }
}

impl Serialize for MedianRank {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}

/// Both categories and the median rank of one action.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ActionRanking {
    pub action: String,
    pub pessimistic: Category,
    pub optimistic: Category,
    pub median_rank: MedianRank,
}

impl ActionRanking {
    /// Display label joining the optimistic and pessimistic ordinals, e.g. `C32`.
    ///
    /// A formatting convention only; unrelated to the median rank.
    pub fn category_label(&self) -> String {
        format!("C{}{}", self.optimistic.value(), self.pessimistic.value())
    }

    /// One-line summary, e.g. `a1 is classified in category C22 with a median rank of 2.0`.
    pub fn summary_line(&self) -> String {
        format!(
            "{} is classified in category {} with a median rank of {}",
            self.action,
            self.category_label(),
            self.median_rank
        )
    }
}

/// Combines the two sortings.
pub struct RankReconciler;

impl RankReconciler {
    /// Pairs both assignments per action, in pessimistic order.
    ///
    /// # Errors
    /// `MissingEntry` if an action sorted pessimistically was not sorted optimistically.
    pub fn reconcile(
        pessimistic: &CategoryAssignment,
        optimistic: &CategoryAssignment,
    ) -> Result<ActionTable<ActionRanking>, ElectreError> {
        pessimistic.categories.try_map(|action, &pessimistic| {
            let optimistic = optimistic.category(action)?;
            Ok::<_, ElectreError>(ActionRanking {
                action: action.to_string(),
                pessimistic,
                optimistic,
                median_rank: MedianRank::between(pessimistic, optimistic),
            })
        })
    }
}
