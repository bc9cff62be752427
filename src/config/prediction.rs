//! Prediction configuration module.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Prediction configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// Number of predictions returned when no count is requested
    pub default_count: usize,

    /// Upper bound on the number of predictions per request
    pub max_count: usize,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            default_count: 3,
            max_count: 100,
        }
    }
}

impl PredictionConfig {
    /// Resolves a requested count against the configured defaults and bound.
    ///
    /// # Arguments
    ///
    /// * `requested` - Count asked for by the caller, if any.
    ///
    /// # Returns
    ///
    /// The count to use, never above `max_count`.
    pub fn resolve(&self, requested: Option<usize>) -> usize {
        let count = requested.unwrap_or(self.default_count);
        if count > self.max_count {
            tracing::warn!(
                requested = count,
                max_count = self.max_count,
                "Clamping prediction count"
            );
            self.max_count
        } else {
            count
        }
    }
}

impl Validate for PredictionConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.default_count == 0 {
            return Err(ConfigError::ValidationError(
                "default_count must be greater than 0".to_string(),
            ));
        }

        if self.default_count > self.max_count {
            return Err(ConfigError::ValueOutOfRange {
                key: "prediction.default_count".to_string(),
                message: format!("must not exceed max_count ({})", self.max_count),
            });
        }

        Ok(())
    }
}
