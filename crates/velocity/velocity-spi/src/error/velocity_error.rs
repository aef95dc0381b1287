//! Velocity forecasting error types

use thiserror::Error;

/// Errors that can occur while forecasting sprint velocity
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VelocityError {
    /// The series is empty or every observation is marked invalid
    #[error("No (valid) observations provided for forecasting")]
    NoValidObservations,

    /// Not enough valid observations for the requested computation
    #[error("Insufficient data: need at least {required} valid observations, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// A raw input value cannot be turned into an observation
    #[error("Invalid observation at sprint {position}: {value}")]
    InvalidObservation { position: usize, value: f64 },

    /// Invalid configuration value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },
}

impl VelocityError {
    /// Shorthand for [`VelocityError::InvalidParameter`].
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
