//! Velocity Forecast Core
//!
//! Implementations of the observation filter, confidence interval indexing,
//! the incremental forecaster, classifiers and the overlap band.

pub mod analysis;
pub mod classifier;
pub mod filter;
pub mod forecaster;
pub mod interval;
pub mod overlap;

// Re-export SPI traits for implementations
pub use velocity_spi::{
    Band, BandCounts, ClassifiedObservation, Forecast, ForecastSeries, IntervalEstimator,
    Observation, ObservationClassifier, OverlapBand, Result, VelocityError,
};

// Re-export main types
pub use analysis::{analyze, VelocityAnalysis, VelocityAnalyzer};
pub use classifier::{LatestForecastClassifier, PriorForecastClassifier};
pub use forecaster::{ForecastAccumulator, IncrementalForecaster};
pub use interval::RankIntervalEstimator;
pub use overlap::{forecast_overlap, overlap_band};
