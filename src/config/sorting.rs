//! Sorting configuration

use serde::Deserialize;

use crate::domain::electre::CuttingThreshold;

use super::error::ValidationError;

/// Parameters of the sorting run
#[derive(Debug, Clone, Deserialize)]
pub struct SortingConfig {
    /// Cutting level λ for the outranking relation
    #[serde(default = "default_cutting_threshold")]
    pub cutting_threshold: f64,
}

impl SortingConfig {
    /// The configured λ as a validated domain value
    pub fn cutting_threshold(&self) -> Result<CuttingThreshold, ValidationError> {
        Ok(CuttingThreshold::new(self.cutting_threshold)?)
    }

    /// Validate sorting configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.cutting_threshold().map(|_| ())
    }
}

impl Default for SortingConfig {
    fn default() -> Self {
        Self {
            cutting_threshold: default_cutting_threshold(),
        }
    }
}

fn default_cutting_threshold() -> f64 {
    0.75
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::electre::ElectreError;

    #[test]
    fn test_sorting_config_defaults() {
        let config = SortingConfig::default();
        assert_eq!(config.cutting_threshold, 0.75);
        assert!(config.validate().is_ok());
        assert_eq!(config.cutting_threshold().unwrap().value(), 0.75);
    }

    #[test]
    fn test_cutting_threshold_bounds() {
        for lambda in [0.0, -0.2, 1.01, f64::NAN] {
            let config = SortingConfig {
                cutting_threshold: lambda,
            };
            assert!(config.validate().is_err(), "accepted {lambda}");
        }

        let config = SortingConfig {
            cutting_threshold: 1.0,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cutting_threshold_error_comes_from_domain_rule() {
        let config = SortingConfig {
            cutting_threshold: 1.5,
        };
        assert_eq!(
            config.cutting_threshold().unwrap_err(),
            ValidationError::Sorting(ElectreError::InvalidCuttingThreshold { lambda: 1.5 })
        );
    }
}
