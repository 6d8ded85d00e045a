//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ProblemSource` - Produces a validated sorting problem
//! - `ReportWriter` - Renders a sorting outcome

mod problem_source;
mod report_writer;

pub use problem_source::{ProblemSource, SourceError};
pub use report_writer::{ReportError, ReportWriter};
