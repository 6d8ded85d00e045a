//! Input file configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Locations of the four CSV input files
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Criterion names and weights
    pub criteria_path: String,

    /// Action scores per criterion
    pub performances_path: String,

    /// Moderate profile thresholds
    pub moderate_thresholds_path: String,

    /// Good profile thresholds
    pub good_thresholds_path: String,
}

impl InputConfig {
    /// Validate input configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let paths = [
            ("input.criteria_path", &self.criteria_path),
            ("input.performances_path", &self.performances_path),
            ("input.moderate_thresholds_path", &self.moderate_thresholds_path),
            ("input.good_thresholds_path", &self.good_thresholds_path),
        ];
        for (key, path) in paths {
            if path.trim().is_empty() {
                return Err(ValidationError::MissingRequired(key));
            }
        }
        Ok(())
    }
}
