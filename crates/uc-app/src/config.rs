//! Form settings, optionally loaded from a YAML file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::registry::UnitCategory;

const MAX_PRECISION: usize = 12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Decimal places in the result
    pub precision: usize,
    pub default_value: f64,
    /// Increment of the numeric input widget
    pub step: f64,
    pub default_category: UnitCategory,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            precision: 4,
            default_value: 1.0,
            step: 0.1,
            default_category: UnitCategory::Length,
        }
    }
}

impl ConverterConfig {
    /// Load settings from a YAML file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AppError::ConfigFileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config = Self::from_yaml_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> AppResult<Self> {
        // An empty file deserializes to unit, not a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("Failed to parse config YAML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Precision to render with, taking a per-invocation override into account.
    pub fn precision_or(&self, precision: Option<usize>) -> AppResult<usize> {
        match precision {
            Some(precision) => check_precision(precision),
            None => Ok(self.precision),
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        check_precision(self.precision)?;
        if !self.default_value.is_finite() {
            return Err(AppError::Config("default_value must be finite".to_string()));
        }
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(AppError::Config(format!(
                "step must be a positive number, got {}",
                self.step
            )));
        }
        Ok(())
    }
}

fn check_precision(precision: usize) -> AppResult<usize> {
    if precision > MAX_PRECISION {
        return Err(AppError::Config(format!(
            "precision must be at most {}, got {}",
            MAX_PRECISION, precision
        )));
    }
    Ok(precision)
}
