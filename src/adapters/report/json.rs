//! JSON report writer.

use std::io::Write;

use crate::domain::electre::SortingOutcome;
use crate::ports::{ReportError, ReportWriter};

/// Serializes the whole outcome, intermediates included.
#[derive(Debug, Clone, Copy)]
pub struct JsonReportWriter {
    pretty: bool,
}

impl JsonReportWriter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Single-line output, one document per run.
    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonReportWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportWriter for JsonReportWriter {
    fn write(&self, outcome: &SortingOutcome, out: &mut dyn Write) -> Result<(), ReportError> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *out, outcome)?;
        } else {
            serde_json::to_writer(&mut *out, outcome)?;
        }
        writeln!(out)?;
        Ok(())
    }
}
