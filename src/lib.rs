//! ELECTRE Tri - Multi-criteria sorting into ordered categories
//!
//! Each action is compared with two reference profiles (Moderate and Good)
//! and assigned to Bad, Moderate or Good by both the pessimistic and the
//! optimistic procedure. The median of the two assignments ranks the action.
//!
//! # Layout
//!
//! - `domain` - Pure sorting pipeline and value objects
//! - `ports` - Interfaces for loading problems and writing reports
//! - `adapters` - CSV source, text and JSON report writers
//! - `config` - Environment-driven configuration
//! - `telemetry` - Tracing subscriber setup

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
