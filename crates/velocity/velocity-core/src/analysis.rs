//! End-to-end velocity analysis
//!
//! Runs the forecaster and both classifiers over one series and bundles the
//! results for presentation.

use serde::{Deserialize, Serialize};
use tracing::debug;
use velocity_api::ForecastConfig;
use velocity_spi::{
    BandCounts, ClassifiedObservation, Forecast, ForecastSeries, Observation,
    ObservationClassifier, OverlapBand, Result, VelocityError,
};

use crate::classifier::{LatestForecastClassifier, PriorForecastClassifier};
use crate::filter::{check_observations, valid_count};
use crate::forecaster::{truncated_mean, IncrementalForecaster};
use crate::overlap::forecast_overlap;

/// Everything derived from one observation series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VelocityAnalysis {
    pub config: ForecastConfig,
    pub observations: Vec<Observation>,
    pub forecasts: ForecastSeries,
    /// Each sprint against the forecast made before it, chronological
    pub timeline: Vec<ClassifiedObservation>,
    /// Every observation against the latest forecast, ascending velocity
    pub distribution: Vec<ClassifiedObservation>,
    /// Band tally of `timeline`
    pub counts: BandCounts,
    pub overlap: Option<OverlapBand>,
    /// Truncated mean of all valid observations
    pub mean_velocity: f64,
    pub valid_count: usize,
    pub invalid_count: usize,
}

impl VelocityAnalysis {
    /// Forecast for the sprint after the last observation.
    pub fn next_forecast(&self) -> Option<&Forecast> {
        self.forecasts.latest()
    }
}

/// Runs the complete analysis with a fixed configuration.
#[derive(Debug, Clone)]
pub struct VelocityAnalyzer {
    config: ForecastConfig,
    forecaster: IncrementalForecaster,
}

impl VelocityAnalyzer {
    pub fn new(config: ForecastConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            forecaster: IncrementalForecaster::from_config(&config),
            config,
        })
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Analyze a chronological series.
    ///
    /// Fails with [`VelocityError::InvalidObservation`] on a negative or
    /// non-finite velocity, and with [`VelocityError::NoValidObservations`]
    /// when the series is empty or every observation is invalid.
    pub fn analyze(&self, observations: &[Observation]) -> Result<VelocityAnalysis> {
        check_observations(observations)?;
        let valid = valid_count(observations);
        if valid == 0 {
            return Err(VelocityError::NoValidObservations);
        }

        let forecasts = self.forecaster.forecast(observations)?;
        let timeline = PriorForecastClassifier.classify(observations, &forecasts);
        let distribution = LatestForecastClassifier.classify(observations, &forecasts);
        let counts = BandCounts::from_classified(&timeline);
        let overlap = forecast_overlap(&forecasts);

        let values: Vec<f64> = observations.iter().filter_map(|o| o.valid_value()).collect();
        let mean_velocity = truncated_mean(&values).ok_or(VelocityError::NoValidObservations)?;

        if forecasts.is_empty() {
            debug!(valid, "not enough valid history for any forecast");
        }
        debug!(
            observations = observations.len(),
            valid,
            forecasts = forecasts.len(),
            "velocity analysis complete"
        );

        Ok(VelocityAnalysis {
            config: self.config,
            observations: observations.to_vec(),
            forecasts,
            timeline,
            distribution,
            counts,
            overlap,
            mean_velocity,
            valid_count: valid,
            invalid_count: observations.len() - valid,
        })
    }
}

/// Analyze `observations` with `config`.
pub fn analyze(observations: &[Observation], config: &ForecastConfig) -> Result<VelocityAnalysis> {
    VelocityAnalyzer::new(*config)?.analyze(observations)
}
