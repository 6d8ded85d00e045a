//! Problem Source Port - Input loading interface.
//!
//! This port defines the contract for producing a validated sorting problem
//! from some external representation. The domain never reads files itself;
//! adapters (like CsvProblemSource) provide the implementation.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::electre::{ElectreError, SortingProblem};

/// Port for loading a sorting problem.
///
/// # Contract
///
/// Implementations must:
/// - Preserve the order of criteria and actions as given in the source
/// - Build thresholds through the validating constructors
/// - Fail the whole load on the first fault (no partial problem)
///
/// # Usage
///
/// ```rust,ignore
/// let source: &dyn ProblemSource = get_source();
/// let problem = source.load()?;
/// let outcome = ElectreTri::new(0.75)?.sort(&problem)?;
/// ```
pub trait ProblemSource: Send + Sync {
    /// Load criteria, performances and both reference profiles.
    ///
    /// # Errors
    ///
    /// - `SourceError::Io` / `SourceError::Csv` when the input cannot be read
    /// - `SourceError::Malformed` / `SourceError::InvalidNumber` on layout faults
    /// - `SourceError::Domain` when the data violates a domain invariant
    fn load(&self) -> Result<SortingProblem, SourceError>;
}

/// Errors from problem sources.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Underlying read failed.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// CSV tokenizer failed.
    #[error("Invalid CSV in {path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },

    /// The file does not follow the expected layout.
    #[error("Malformed {path}: {reason}")]
    Malformed { path: PathBuf, reason: String },

    /// A numeric field could not be parsed.
    #[error("Invalid number '{value}' in {path} at line {line}, column {column}")]
    InvalidNumber {
        path: PathBuf,
        line: usize,
        column: usize,
        value: String,
    },

    /// The loaded data violates a domain invariant.
    #[error(transparent)]
    Domain(#[from] ElectreError),
}

impl SourceError {
    /// Creates a malformed-layout error.
    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
