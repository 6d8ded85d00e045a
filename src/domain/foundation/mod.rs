//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, enums, and error types
//! that form the vocabulary of the sorting domain.

mod category;
mod errors;
mod unit_interval;

pub use category::Category;
pub use errors::{ErrorCode, ValidationError};
pub use unit_interval::UnitInterval;
