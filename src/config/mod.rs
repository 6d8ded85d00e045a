//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `ELECTRE_TRI` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use electre_tri::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Sorting with lambda = {}", config.sorting.cutting_threshold);
//! ```

mod error;
mod input;
mod logging;
mod output;
mod sorting;

pub use error::{ConfigError, ValidationError};
pub use input::InputConfig;
pub use logging::LoggingConfig;
pub use output::{OutputConfig, OutputFormat};
pub use sorting::SortingConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Sorting parameters (cutting threshold)
    #[serde(default)]
    pub sorting: SortingConfig,

    /// CSV input files
    pub input: InputConfig,

    /// Report format
    #[serde(default)]
    pub output: OutputConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present
    /// 2. Reads environment variables with `ELECTRE_TRI` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `ELECTRE_TRI__SORTING__CUTTING_THRESHOLD=0.6` -> `sorting.cutting_threshold = 0.6`
    /// - `ELECTRE_TRI__INPUT__CRITERIA_PATH=crit.csv` -> `input.criteria_path = crit.csv`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ELECTRE_TRI")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.sorting.validate()?;
        self.input.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
