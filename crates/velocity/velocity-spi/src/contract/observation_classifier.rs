//! Trait for labelling observations against forecasts

use crate::model::{ClassifiedObservation, ForecastSeries, Observation};

/// Assigns every observation a band using a set of forecasts.
pub trait ObservationClassifier: Send + Sync {
    /// Classify `observations`. Output has one entry per observation.
    fn classify(
        &self,
        observations: &[Observation],
        forecasts: &ForecastSeries,
    ) -> Vec<ClassifiedObservation>;
}
