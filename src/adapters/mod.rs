//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `csv` - Problem source over the four-file CSV layout
//! - `report` - Text and JSON report writers

pub mod csv;
pub mod report;

pub use self::csv::CsvProblemSource;
pub use report::{writer_for, JsonReportWriter, TextReportWriter};
