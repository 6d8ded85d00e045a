//! Sorting faults.
//!
//! Every fault aborts the whole run; no partial outcome is ever returned.

use std::fmt;
use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};

use super::Boundary;

/// An input entry the pipeline looked up but could not find.
#[derive(Debug, Clone, PartialEq)]
pub enum MissingEntry {
    Performance { action: String, criterion: String },
    Threshold { boundary: Boundary, criterion: String },
    Weight { criterion: String },
    Action { action: String },
}

impl fmt::Display for MissingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingEntry::Performance { action, criterion } => write!(
                f,
                "performance of action '{}' on criterion '{}'",
                action, criterion
            ),
            MissingEntry::Threshold {
                boundary,
                criterion,
            } => write!(
                f,
                "thresholds of boundary {} on criterion '{}'",
                boundary, criterion
            ),
            MissingEntry::Weight { criterion } => {
                write!(f, "weight of criterion '{}'", criterion)
            }
            MissingEntry::Action { action } => write!(f, "row for action '{}'", action),
        }
    }
}

/// Errors raised while validating inputs or running the sort.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ElectreError {
    #[error("Invalid thresholds for criterion '{criterion}' on boundary {boundary}: {source}")]
    InvalidThresholds {
        boundary: Boundary,
        criterion: String,
        source: ValidationError,
    },

    #[error("Invalid criterion weights: {reason}")]
    InvalidWeights { reason: String },

    #[error("Missing {0}")]
    MissingEntry(MissingEntry),

    #[error("Duplicate {kind} '{id}'")]
    DuplicateEntry { kind: &'static str, id: String },

    #[error("Cutting threshold must lie in (0, 1], got {lambda}")]
    InvalidCuttingThreshold { lambda: f64 },

    #[error("Sorting problem has no {0}")]
    EmptyProblem(&'static str),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ElectreError {
    /// Missing performance of an action on a criterion.
    pub fn missing_performance(action: impl Into<String>, criterion: impl Into<String>) -> Self {
        ElectreError::MissingEntry(MissingEntry::Performance {
            action: action.into(),
            criterion: criterion.into(),
        })
    }

    /// Missing threshold tuple of a boundary on a criterion.
    pub fn missing_threshold(boundary: Boundary, criterion: impl Into<String>) -> Self {
        ElectreError::MissingEntry(MissingEntry::Threshold {
            boundary,
            criterion: criterion.into(),
        })
    }

    /// Missing weight of a criterion.
    pub fn missing_weight(criterion: impl Into<String>) -> Self {
        ElectreError::MissingEntry(MissingEntry::Weight {
            criterion: criterion.into(),
        })
    }

    /// Missing row for an action in an intermediate table.
    pub fn missing_action(action: impl Into<String>) -> Self {
        ElectreError::MissingEntry(MissingEntry::Action {
            action: action.into(),
        })
    }

    /// Returns the stable code for this fault class.
    pub fn code(&self) -> ErrorCode {
        match self {
            ElectreError::InvalidThresholds { .. } => ErrorCode::InvalidThresholds,
            ElectreError::InvalidWeights { .. } => ErrorCode::InvalidWeights,
            ElectreError::MissingEntry(_) => ErrorCode::MissingEntry,
            ElectreError::DuplicateEntry { .. } => ErrorCode::DuplicateEntry,
            ElectreError::InvalidCuttingThreshold { .. } => ErrorCode::InvalidCuttingThreshold,
            ElectreError::EmptyProblem(_) => ErrorCode::EmptyProblem,
            ElectreError::Validation(_) => ErrorCode::ValidationFailed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_performance_names_action_and_criterion() {
        let err = ElectreError::missing_performance("retrofit-a", "cost");
        assert_eq!(
            err.to_string(),
            "Missing performance of action 'retrofit-a' on criterion 'cost'"
        );
        assert_eq!(err.code(), ErrorCode::MissingEntry);
    }

    #[test]
    fn missing_threshold_names_boundary() {
        let err = ElectreError::missing_threshold(Boundary::Good, "comfort");
        assert_eq!(
            err.to_string(),
            "Missing thresholds of boundary Good on criterion 'comfort'"
        );
    }

    #[test]
    fn invalid_thresholds_carries_context() {
        let err = ElectreError::InvalidThresholds {
            boundary: Boundary::Moderate,
            criterion: "energy".to_string(),
            source: ValidationError::UnorderedThresholds {
                indifference: 3.0,
                preference: 2.0,
                veto: 4.0,
            },
        };
        let message = err.to_string();
        assert!(message.contains("'energy'"));
        assert!(message.contains("Moderate"));
        assert!(message.contains("q=3, p=2, v=4"));
        assert_eq!(err.code(), ErrorCode::InvalidThresholds);
    }

    #[test]
    fn cutting_threshold_error_displays_lambda() {
        let err = ElectreError::InvalidCuttingThreshold { lambda: 1.5 };
        assert_eq!(err.to_string(), "Cutting threshold must lie in (0, 1], got 1.5");
        assert_eq!(err.code(), ErrorCode::InvalidCuttingThreshold);
    }

    #[test]
    fn validation_error_converts_with_question_mark() {
        fn fails() -> Result<(), ElectreError> {
            ValidationError::ensure_finite("score", f64::NAN)?;
            Ok(())
        }
        assert_eq!(fails().unwrap_err().code(), ErrorCode::ValidationFailed);
    }
}
