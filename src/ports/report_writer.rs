//! Report Writer Port - Result rendering interface.

use std::io::Write;
use thiserror::Error;

use crate::domain::electre::SortingOutcome;

/// Port for rendering a sorting outcome to a byte sink.
///
/// Implementations only format; they never recompute anything.
pub trait ReportWriter: Send + Sync {
    /// Render the outcome into `out`.
    fn write(&self, outcome: &SortingOutcome, out: &mut dyn Write) -> Result<(), ReportError>;
}

/// Errors from report writers.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}
