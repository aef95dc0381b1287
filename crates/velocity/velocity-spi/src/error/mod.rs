//! Error module containing the error type and result alias

mod velocity_error;

pub use velocity_error::VelocityError;

/// Result type for velocity forecasting operations
pub type Result<T> = std::result::Result<T, VelocityError>;
