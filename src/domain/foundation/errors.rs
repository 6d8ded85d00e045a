//! Error types shared by the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be a finite number, got {actual}")]
    NotFinite { field: String, actual: f64 },

    #[error("Thresholds must satisfy q < p < v, got q={indifference}, p={preference}, v={veto}")]
    UnorderedThresholds {
        indifference: f64,
        preference: f64,
        veto: f64,
    },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates a non-finite number validation error.
    pub fn not_finite(field: impl Into<String>, actual: f64) -> Self {
        ValidationError::NotFinite {
            field: field.into(),
            actual,
        }
    }

    /// Rejects NaN and infinities.
    pub fn ensure_finite(field: &str, value: f64) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::not_finite(field, value))
        }
    }
}

/// Stable error codes, one per fault class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ValidationFailed,
    InvalidThresholds,
    InvalidWeights,
    MissingEntry,
    DuplicateEntry,
    InvalidCuttingThreshold,
    EmptyProblem,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::InvalidThresholds => "INVALID_THRESHOLDS",
            ErrorCode::InvalidWeights => "INVALID_WEIGHTS",
            ErrorCode::MissingEntry => "MISSING_ENTRY",
            ErrorCode::DuplicateEntry => "DUPLICATE_ENTRY",
            ErrorCode::InvalidCuttingThreshold => "INVALID_CUTTING_THRESHOLD",
            ErrorCode::EmptyProblem => "EMPTY_PROBLEM",
        };
        write!(f, "{}", s)
    }
}
