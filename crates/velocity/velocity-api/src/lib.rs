//! Velocity Forecast API
//!
//! Configuration types and builders for sprint velocity forecasting.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use velocity_spi::{Result, VelocityError};

/// Default confidence level of the forecast interval.
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.90;

/// Below this many valid observations the interval spans the whole sample.
pub const DEFAULT_SMALL_SAMPLE_THRESHOLD: usize = 7;

/// Lowest confidence level with a z-score in the lookup table.
pub const MIN_CONFIDENCE_LEVEL: f64 = 0.80;

/// Valid observations needed before the first forecast is made.
pub const DEFAULT_MIN_HISTORY: usize = 2;

// ============================================================================
// Forecast Configuration
// ============================================================================

/// Forecaster configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Confidence level of the interval (default: 0.90).
    pub confidence_level: f64,
    /// Sample size below which the interval is the observed min/max (default: 7).
    pub small_sample_threshold: usize,
    /// Valid observations required before forecasting starts (default: 2).
    pub min_history: usize,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
            small_sample_threshold: DEFAULT_SMALL_SAMPLE_THRESHOLD,
            min_history: DEFAULT_MIN_HISTORY,
        }
    }
}

impl ForecastConfig {
    pub fn builder() -> ForecastConfigBuilder {
        ForecastConfigBuilder::new()
    }

    /// Check every field, returning the first offending one.
    pub fn validate(&self) -> Result<()> {
        if !(self.confidence_level >= MIN_CONFIDENCE_LEVEL && self.confidence_level < 1.0) {
            return Err(VelocityError::invalid_parameter(
                "confidence_level",
                format!(
                    "must be at least {} and below 1, got {}",
                    MIN_CONFIDENCE_LEVEL, self.confidence_level
                ),
            ));
        }
        if self.small_sample_threshold == 0 {
            return Err(VelocityError::invalid_parameter(
                "small_sample_threshold",
                "must be at least 1",
            ));
        }
        if self.min_history == 0 {
            return Err(VelocityError::invalid_parameter(
                "min_history",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Builder for [`ForecastConfig`].
#[derive(Debug, Default)]
pub struct ForecastConfigBuilder {
    confidence_level: Option<f64>,
    small_sample_threshold: Option<usize>,
    min_history: Option<usize>,
}

impl ForecastConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the confidence level.
    pub fn confidence_level(mut self, level: f64) -> Self {
        self.confidence_level = Some(level);
        self
    }

    /// Set the small sample threshold.
    pub fn small_sample_threshold(mut self, threshold: usize) -> Self {
        self.small_sample_threshold = Some(threshold);
        self
    }

    /// Set the minimum history.
    pub fn min_history(mut self, min_history: usize) -> Self {
        self.min_history = Some(min_history);
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<ForecastConfig> {
        let defaults = ForecastConfig::default();
        let config = ForecastConfig {
            confidence_level: self.confidence_level.unwrap_or(defaults.confidence_level),
            small_sample_threshold: self
                .small_sample_threshold
                .unwrap_or(defaults.small_sample_threshold),
            min_history: self.min_history.unwrap_or(defaults.min_history),
        };
        config.validate()?;
        Ok(config)
    }
}
