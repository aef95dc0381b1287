//! Contract module containing trait definitions for velocity forecasting

mod interval_estimator;
mod observation_classifier;

pub use interval_estimator::IntervalEstimator;
pub use observation_classifier::ObservationClassifier;
