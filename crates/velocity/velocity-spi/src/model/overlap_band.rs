//! Consensus band across all forecasts

use serde::{Deserialize, Serialize};

/// Velocity range shared by every forecast interval, after trimming the
/// most extreme bounds when no common range exists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlapBand {
    pub lower: f64,
    pub upper: f64,
    /// Highest lower bounds dropped to reach an overlap
    pub trimmed_lower: usize,
    /// Lowest upper bounds dropped to reach an overlap
    pub trimmed_upper: usize,
}

impl OverlapBand {
    /// Whether any bound had to be dropped.
    pub fn is_trimmed(&self) -> bool {
        self.trimmed_lower > 0 || self.trimmed_upper > 0
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}
