//! Velocity Forecast Service Provider Interface
//!
//! Defines the observation, forecast and classification model together with
//! the traits implemented by the interval estimator and classifiers.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{IntervalEstimator, ObservationClassifier};
pub use error::{Result, VelocityError};
pub use model::{
    Band, BandCounts, ClassifiedObservation, Forecast, ForecastSeries, Observation, OverlapBand,
};
