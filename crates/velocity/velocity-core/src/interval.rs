//! Rank-based confidence interval indexing
//!
//! The interval is read straight out of the sorted sample: with `n` valid
//! observations the bounds sit at ranks
//!
//! ```text
//! lower(n) = ceil(n/2 - z * sqrt(n/4)) - 1
//! upper(n) = ceil(n/2 + z * sqrt(n/4)) - 1
//! ```
//!
//! (zero-based), which is the normal approximation to the binomial
//! distribution of the median's rank. For small samples the formula reaches
//! past the ends of the sample, so below a threshold the whole observed range
//! is used instead.

use velocity_api::{ForecastConfig, DEFAULT_SMALL_SAMPLE_THRESHOLD};
use velocity_spi::{IntervalEstimator, Result, VelocityError};

/// z-score of a two-sided 90% interval.
pub const Z_90: f64 = 1.645;

/// Get z-score for a given confidence level
pub fn z_score(confidence_level: f64) -> f64 {
    match confidence_level {
        x if x >= 0.99 => 2.576,
        x if x >= 0.95 => 1.96,
        x if x >= 0.90 => 1.645,
        x if x >= 0.80 => 1.282,
        _ => 1.645, // below 0.80 is rejected by ForecastConfig::validate
    }
}

/// Raw lower rank index for `n` observations at 90% confidence.
///
/// May be negative for small `n`.
pub fn lower_index(n: usize) -> i64 {
    lower_index_with(n, Z_90)
}

/// Raw upper rank index for `n` observations at 90% confidence.
///
/// May be `>= n` for small `n`.
pub fn upper_index(n: usize) -> i64 {
    upper_index_with(n, Z_90)
}

pub fn lower_index_with(n: usize, z: f64) -> i64 {
    let n = n as f64;
    ((n / 2.0) - z * (n * 0.25).sqrt()).ceil() as i64 - 1
}

pub fn upper_index_with(n: usize, z: f64) -> i64 {
    let n = n as f64;
    ((n / 2.0) + z * (n * 0.25).sqrt()).ceil() as i64 - 1
}

/// Interval estimator that picks order statistics from the sorted sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankIntervalEstimator {
    z: f64,
    small_sample_threshold: usize,
}

impl RankIntervalEstimator {
    pub fn new(z: f64, small_sample_threshold: usize) -> Self {
        Self {
            z,
            small_sample_threshold,
        }
    }

    pub fn from_config(config: &ForecastConfig) -> Self {
        Self::new(z_score(config.confidence_level), config.small_sample_threshold)
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    pub fn small_sample_threshold(&self) -> usize {
        self.small_sample_threshold
    }
}

impl Default for RankIntervalEstimator {
    fn default() -> Self {
        Self::new(Z_90, DEFAULT_SMALL_SAMPLE_THRESHOLD)
    }
}

impl IntervalEstimator for RankIntervalEstimator {
    fn indexes(&self, n: usize) -> Result<(usize, usize)> {
        if n == 0 {
            return Err(VelocityError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }
        if n < self.small_sample_threshold {
            return Ok((0, n - 1));
        }

        let last = (n - 1) as i64;
        let lower = lower_index_with(n, self.z).clamp(0, last);
        let upper = upper_index_with(n, self.z).clamp(0, last);
        Ok((lower as usize, upper as usize))
    }
}
