//! CSV adapter - Loads a sorting problem from comma-separated files.

mod problem_source;

pub use problem_source::CsvProblemSource;
