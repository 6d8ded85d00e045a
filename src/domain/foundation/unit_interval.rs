//! Unit interval value object (0.0-1.0 scale).

use serde::Serialize;
use std::fmt;

/// A degree between 0 and 1 inclusive.
///
/// Used for every fuzzy quantity of the outranking pipeline: partial
/// concordance and discordance indices, global concordance, credibility.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct UnitInterval(f64);

impl UnitInterval {
    /// The lowest degree.
    pub const ZERO: Self = Self(0.0);

    /// The highest degree.
    pub const ONE: Self = Self(1.0);

    /// Creates a degree, clamping to the valid range.
    ///
    /// NaN collapses to zero.
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns `1 - value`.
    pub fn complement(&self) -> f64 {
        1.0 - self.0
    }
}

impl Default for UnitInterval {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for UnitInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}
