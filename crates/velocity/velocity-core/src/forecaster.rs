//! Incremental forecaster
//!
//! Walks the series once, keeping the valid values seen so far in a sorted
//! accumulator. After each sprint with enough history it emits a forecast for
//! the following sprint.

use tracing::{debug, trace};
use velocity_api::{ForecastConfig, DEFAULT_MIN_HISTORY};
use velocity_spi::{Forecast, ForecastSeries, IntervalEstimator, Observation, Result};

use crate::filter::check_observations;
use crate::interval::RankIntervalEstimator;

/// Mean truncated to a whole number, `None` for an empty sample.
pub fn truncated_mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some((values.iter().sum::<f64>() / values.len() as f64).trunc())
}

/// Running state over a chronological prefix of observations.
#[derive(Debug, Clone, Default)]
pub struct ForecastAccumulator {
    sorted: Vec<f64>,
    sum: f64,
    observed: usize,
}

impl ForecastAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the next observation in chronological order.
    pub fn push(&mut self, observation: Observation) {
        self.observed += 1;
        if let Some(value) = observation.valid_value() {
            let pos = self.sorted.partition_point(|&x| x <= value);
            self.sorted.insert(pos, value);
            self.sum += value;
        }
    }

    /// Number of observations pushed, valid or not.
    pub fn observed(&self) -> usize {
        self.observed
    }

    pub fn valid_count(&self) -> usize {
        self.sorted.len()
    }

    /// Valid values seen so far, ascending.
    pub fn sorted(&self) -> &[f64] {
        &self.sorted
    }

    pub fn mean(&self) -> Option<f64> {
        if self.sorted.is_empty() {
            return None;
        }
        Some((self.sum / self.sorted.len() as f64).trunc())
    }
}

/// Produces one forecast per sprint once enough valid history exists.
#[derive(Debug, Clone)]
pub struct IncrementalForecaster<E = RankIntervalEstimator> {
    estimator: E,
    min_history: usize,
}

impl IncrementalForecaster<RankIntervalEstimator> {
    pub fn new() -> Self {
        Self::with_estimator(RankIntervalEstimator::default(), DEFAULT_MIN_HISTORY)
    }

    pub fn from_config(config: &ForecastConfig) -> Self {
        Self::with_estimator(
            RankIntervalEstimator::from_config(config),
            config.min_history,
        )
    }
}

impl Default for IncrementalForecaster<RankIntervalEstimator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: IntervalEstimator> IncrementalForecaster<E> {
    pub fn with_estimator(estimator: E, min_history: usize) -> Self {
        Self {
            estimator,
            min_history: min_history.max(1),
        }
    }

    pub fn min_history(&self) -> usize {
        self.min_history
    }

    /// Forecast for the sprint after the accumulator's last observation, or
    /// `None` while there is too little valid history.
    pub fn next_forecast(&self, acc: &ForecastAccumulator) -> Result<Option<Forecast>> {
        let n = acc.valid_count();
        if n < self.min_history {
            return Ok(None);
        }
        let Some(mean) = acc.mean() else {
            return Ok(None);
        };
        let (lower, upper) = self.estimator.interval(acc.sorted())?;

        Ok(Some(Forecast {
            sprint: acc.observed() + 1,
            observed_through: acc.observed(),
            sample_size: n,
            mean,
            lower,
            upper,
        }))
    }

    /// Forecasts for every prefix of `observations`.
    ///
    /// Fails on a negative or non-finite velocity.
    pub fn forecast(&self, observations: &[Observation]) -> Result<ForecastSeries> {
        check_observations(observations)?;
        let mut acc = ForecastAccumulator::new();
        let mut forecasts = Vec::with_capacity(observations.len());

        for &obs in observations {
            acc.push(obs);
            match self.next_forecast(&acc)? {
                Some(f) => {
                    trace!(
                        sprint = f.sprint,
                        mean = f.mean,
                        lower = f.lower,
                        upper = f.upper,
                        "forecast"
                    );
                    forecasts.push(f);
                }
                None => trace!(
                    observed = acc.observed(),
                    valid = acc.valid_count(),
                    "not enough history to forecast"
                ),
            }
        }

        debug!(
            observations = observations.len(),
            forecasts = forecasts.len(),
            "forecast series computed"
        );
        Ok(ForecastSeries::new(forecasts))
    }
}
