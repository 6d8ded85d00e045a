//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, enums, errors)
//! - `electre` - Pure ELECTRE Tri sorting pipeline

pub mod electre;
pub mod foundation;
