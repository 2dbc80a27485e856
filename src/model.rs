//! Regression model artifact
//!
//! The original computation lived in an opaque pre-trained model. Here it
//! is an explicit linear regression whose coefficients ship in a TOML
//! artifact: a bundled default, or a file named in the configuration.
//! Anything wrong with the artifact surfaces as `ModelUnavailable`.

use crate::config::Config;
use crate::core::traits::SleepEstimator;
use crate::utils::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default artifact compiled into the binary
const BUNDLED_ARTIFACT: &str = include_str!("../models/sleep_calculator.toml");

/// Artifact schema revision this build understands
pub const SUPPORTED_SCHEMA: u32 = 1;

/// Per-feature weights of the regression
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coefficients {
    pub wake: f64,
    pub estimated_sleep: f64,
    pub coffee: f64,
}

/// A loaded regression artifact mapping (wake, sleep, coffee) to the
/// estimated required sleep in seconds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleepModel {
    pub name: String,
    pub schema: u32,
    pub intercept: f64,
    pub coefficients: Coefficients,
}

impl SleepModel {
    /// Load the artifact bundled into the binary
    pub fn bundled() -> AppResult<Self> {
        Self::from_toml(BUNDLED_ARTIFACT)
    }

    /// Load an artifact from a file on disk
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::ModelUnavailable(format!(
                "Failed to read model artifact {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&content)
    }

    /// Load the artifact named in the configuration, or the bundled one
    pub fn from_config(config: &Config) -> AppResult<Self> {
        match &config.model.path {
            Some(path) => Self::load(path),
            None => Self::bundled(),
        }
    }

    fn from_toml(content: &str) -> AppResult<Self> {
        let model: SleepModel = toml::from_str(content).map_err(|e| {
            AppError::ModelUnavailable(format!("Malformed model artifact: {}", e))
        })?;
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> AppResult<()> {
        if self.schema != SUPPORTED_SCHEMA {
            return Err(AppError::ModelUnavailable(format!(
                "Unsupported model schema {} (expected {})",
                self.schema, SUPPORTED_SCHEMA
            )));
        }

        let weights = [
            self.intercept,
            self.coefficients.wake,
            self.coefficients.estimated_sleep,
            self.coefficients.coffee,
        ];
        if weights.iter().any(|w| !w.is_finite()) {
            return Err(AppError::ModelUnavailable(
                "Model artifact contains non-finite coefficients".to_string(),
            ));
        }

        Ok(())
    }
}

impl SleepEstimator for SleepModel {
    fn estimated_sleep_seconds(
        &self,
        wake_seconds: f64,
        sleep_hours: f64,
        coffee_cups: f64,
    ) -> AppResult<f64> {
        let estimate = self.intercept
            + self.coefficients.wake * wake_seconds
            + self.coefficients.estimated_sleep * sleep_hours
            + self.coefficients.coffee * coffee_cups;

        if !estimate.is_finite() || estimate <= 0.0 {
            return Err(AppError::ModelUnavailable(format!(
                "Model produced an unusable sleep estimate: {}",
                estimate
            )));
        }

        Ok(estimate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_artifact_loads() {
        let model = SleepModel::bundled().unwrap();
        assert_eq!(model.name, "SleepCalculator");
        assert_eq!(model.schema, SUPPORTED_SCHEMA);
    }

    #[test]
    fn test_bundled_evaluation_is_pinned() {
        let model = SleepModel::bundled().unwrap();
        // wake 07:00 = 25200s, sleep 8h, coffee 2 cups
        let estimate = model.estimated_sleep_seconds(25_200.0, 8.0, 2.0).unwrap();
        assert_eq!(estimate, 30_388.0);
    }

    #[test]
    fn test_malformed_artifact_is_unavailable() {
        let err = SleepModel::from_toml("name = \"broken\"").unwrap_err();
        assert!(matches!(err, AppError::ModelUnavailable(_)));

        let err = SleepModel::from_toml("not even toml [").unwrap_err();
        assert!(matches!(err, AppError::ModelUnavailable(_)));
    }

    #[test]
    fn test_non_finite_coefficients_rejected() {
        let artifact = r#"
name = "SleepCalculator"
schema = 1
intercept = nan

[coefficients]
wake = 0.04
estimated_sleep = 3500.0
coffee = 90.0
"#;
        let err = SleepModel::from_toml(artifact).unwrap_err();
        assert!(matches!(err, AppError::ModelUnavailable(_)));
    }

    #[test]
    fn test_unknown_schema_rejected() {
        let artifact = r#"
name = "SleepCalculator"
schema = 2
intercept = 1200.0

[coefficients]
wake = 0.04
estimated_sleep = 3500.0
coffee = 90.0
"#;
        let err = SleepModel::from_toml(artifact).unwrap_err();
        assert!(matches!(err, AppError::ModelUnavailable(_)));
    }

    #[test]
    fn test_missing_artifact_file_is_unavailable() {
        let err = SleepModel::load(Path::new("/nonexistent/model.toml")).unwrap_err();
        assert!(matches!(err, AppError::ModelUnavailable(_)));
    }

    #[test]
    fn test_negative_estimate_is_unusable() {
        let model = SleepModel {
            name: "SleepCalculator".to_string(),
            schema: SUPPORTED_SCHEMA,
            intercept: -100_000.0,
            coefficients: Coefficients {
                wake: 0.0,
                estimated_sleep: 0.0,
                coffee: 0.0,
            },
        };
        assert!(model.estimated_sleep_seconds(25_200.0, 8.0, 2.0).is_err());
    }
}
