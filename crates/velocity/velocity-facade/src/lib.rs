//! Velocity Forecast Facade
//!
//! Unified re-exports for sprint velocity forecasting.
//!
//! This facade provides a single entry point:
//! - `Observation`, `Forecast`, `Band` and the contracts from SPI
//! - `ForecastConfig` and its builder from API
//! - The forecaster, classifiers, overlap band and `analyze` from Core

// Re-export everything from SPI
pub use velocity_spi::*;

// Re-export everything from API
pub use velocity_api::*;

// Re-export everything from Core
pub use velocity_core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use velocity_api::{ForecastConfig, ForecastConfigBuilder};
    pub use velocity_core::{
        analyze, filter::observations_from_signed, IncrementalForecaster,
        LatestForecastClassifier, PriorForecastClassifier, RankIntervalEstimator,
        VelocityAnalysis, VelocityAnalyzer,
    };
    pub use velocity_spi::{
        Band, BandCounts, ClassifiedObservation, Forecast, ForecastSeries, IntervalEstimator,
        Observation, ObservationClassifier, OverlapBand, Result, VelocityError,
    };
}
