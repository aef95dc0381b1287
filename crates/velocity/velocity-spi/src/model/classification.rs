//! Classification of observations against a forecast

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where an observation landed relative to the forecast made before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    /// Below the forecast lower bound
    Below,
    /// Inside the forecast interval
    Within,
    /// Above the forecast upper bound
    Above,
    /// Not enough valid history to have a forecast
    Unclassified,
    /// Observation excluded from forecasting
    Invalid,
}

impl Band {
    pub const ALL: [Band; 5] = [
        Band::Unclassified,
        Band::Below,
        Band::Within,
        Band::Above,
        Band::Invalid,
    ];

    /// Human readable description used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Band::Below => "Below Forecasted CI",
            Band::Within => "Within Forecasted CI",
            Band::Above => "Above Forecasted CI",
            Band::Unclassified => "Observed before Forecasting CI",
            Band::Invalid => "Invalid Observation",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Band::Below => "below",
            Band::Within => "within",
            Band::Above => "above",
            Band::Unclassified => "unclassified",
            Band::Invalid => "invalid",
        };
        f.write_str(name)
    }
}

/// One observation with its band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedObservation {
    /// 1-based sprint number of the observation
    pub sprint: usize,
    /// True velocity (magnitude for invalid observations)
    pub value: f64,
    pub band: Band,
}

/// Number of observations per band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandCounts {
    pub below: usize,
    pub within: usize,
    pub above: usize,
    pub unclassified: usize,
    pub invalid: usize,
}

impl BandCounts {
    pub fn from_classified(classified: &[ClassifiedObservation]) -> Self {
        let mut counts = Self::default();
        for c in classified {
            counts.increment(c.band);
        }
        counts
    }

    pub fn increment(&mut self, band: Band) {
        *self.slot(band) += 1;
    }

    pub fn get(&self, band: Band) -> usize {
        match band {
            Band::Below => self.below,
            Band::Within => self.within,
            Band::Above => self.above,
            Band::Unclassified => self.unclassified,
            Band::Invalid => self.invalid,
        }
    }

    pub fn total(&self) -> usize {
        self.below + self.within + self.above + self.unclassified + self.invalid
    }

    /// Observations that were compared against a forecast.
    pub fn classified(&self) -> usize {
        self.below + self.within + self.above
    }

    fn slot(&mut self, band: Band) -> &mut usize {
        match band {
            Band::Below => &mut self.below,
            Band::Within => &mut self.within,
            Band::Above => &mut self.above,
            Band::Unclassified => &mut self.unclassified,
            Band::Invalid => &mut self.invalid,
        }
    }
}
