//! Category value object: the three ordered sorting classes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal sorting category, worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Category {
    Bad = 1,
    Moderate = 2,
    Good = 3,
}

impl Category {
    /// All categories, worst first.
    pub const ALL: [Category; 3] = [Category::Bad, Category::Moderate, Category::Good];

    /// Returns the ordinal (1 = Bad, 3 = Good).
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Bad => "Bad",
            Category::Moderate => "Moderate",
            Category::Good => "Good",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
