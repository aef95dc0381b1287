//! Trait for confidence interval estimation over ranked samples

use crate::error::{Result, VelocityError};

/// Picks the confidence interval bounds out of an ascending-sorted sample.
pub trait IntervalEstimator: Send + Sync {
    /// Zero-based `(lower, upper)` rank indexes for a sample of `n` values.
    ///
    /// Returned indexes are always within `0..n`.
    fn indexes(&self, n: usize) -> Result<(usize, usize)>;

    /// `(lower, upper)` interval values for an ascending-sorted sample.
    fn interval(&self, sorted: &[f64]) -> Result<(f64, f64)> {
        let (lower, upper) = self.indexes(sorted.len())?;
        match (sorted.get(lower), sorted.get(upper)) {
            (Some(&lo), Some(&hi)) => Ok((lo, hi)),
            _ => Err(VelocityError::InsufficientData {
                required: upper + 1,
                actual: sorted.len(),
            }),
        }
    }
}
