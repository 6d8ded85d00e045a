//! Plain-text report writer.

use std::io::Write;

use crate::domain::electre::{CategoryAssignment, Procedure, SortingOutcome};
use crate::domain::foundation::Category;
use crate::ports::{ReportError, ReportWriter};

/// Renders the per-category groups of both sortings followed by one
/// summary line per action.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextReportWriter;

impl TextReportWriter {
    pub fn new() -> Self {
        Self
    }

    fn write_groups(assignment: &CategoryAssignment, out: &mut dyn Write) -> Result<(), ReportError> {
        let title = match assignment.procedure {
            Procedure::Pessimistic => "pessimistic",
            Procedure::Optimistic => "optimistic",
        };
        writeln!(out, "Results of the {} sorting:", title)?;
        for category in Category::ALL {
            let actions = assignment.actions_in(category);
            if actions.is_empty() {
                writeln!(out, "  {}: (none)", category)?;
            } else {
                writeln!(out, "  {}: {}", category, actions.join(", "))?;
            }
        }
        writeln!(out)?;
        Ok(())
    }
}

impl ReportWriter for TextReportWriter {
    fn write(&self, outcome: &SortingOutcome, out: &mut dyn Write) -> Result<(), ReportError> {
        Self::write_groups(&outcome.pessimistic, out)?;
        Self::write_groups(&outcome.optimistic, out)?;
        for line in outcome.summary_lines() {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}
