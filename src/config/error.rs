//! Configuration error types

use thiserror::Error;

use crate::domain::electre::ElectreError;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid sorting parameters: {0}")]
    Sorting(#[from] ElectreError),

    #[error("Invalid log level directive: {0}")]
    InvalidLogLevel(String),
}
