//! Forecast model

use serde::{Deserialize, Serialize};

/// Mean and confidence interval predicted for one upcoming sprint.
///
/// Sprints are numbered from 1. A forecast computed after sprint `k` has
/// `observed_through == k` and `sprint == k + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Sprint this forecast predicts
    pub sprint: usize,
    /// Last sprint included in the history
    pub observed_through: usize,
    /// Number of valid observations the forecast is based on
    pub sample_size: usize,
    /// Mean valid velocity, truncated to a whole number
    pub mean: f64,
    /// Lower bound of the confidence interval
    pub lower: f64,
    /// Upper bound of the confidence interval
    pub upper: f64,
}

impl Forecast {
    /// Whether `value` falls inside the interval (bounds inclusive).
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Forecasts produced while walking an observation series, ordered by sprint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastSeries {
    forecasts: Vec<Forecast>,
}

impl ForecastSeries {
    /// Wrap forecasts that are already in ascending sprint order.
    pub fn new(forecasts: Vec<Forecast>) -> Self {
        debug_assert!(forecasts.windows(2).all(|w| w[0].sprint < w[1].sprint));
        Self { forecasts }
    }

    pub fn len(&self) -> usize {
        self.forecasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forecasts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Forecast> {
        self.forecasts.iter()
    }

    pub fn as_slice(&self) -> &[Forecast] {
        &self.forecasts
    }

    /// Forecast for the sprint after the last observation.
    pub fn latest(&self) -> Option<&Forecast> {
        self.forecasts.last()
    }

    /// Forecast that predicted `sprint`, i.e. the one made just before it.
    pub fn for_sprint(&self, sprint: usize) -> Option<&Forecast> {
        self.forecasts
            .binary_search_by_key(&sprint, |f| f.sprint)
            .ok()
            .map(|idx| &self.forecasts[idx])
    }

    /// `(sprint, mean)` pairs.
    pub fn mean_series(&self) -> Vec<(usize, f64)> {
        self.forecasts.iter().map(|f| (f.sprint, f.mean)).collect()
    }

    /// `(sprint, lower)` pairs.
    pub fn lower_series(&self) -> Vec<(usize, f64)> {
        self.forecasts.iter().map(|f| (f.sprint, f.lower)).collect()
    }

    /// `(sprint, upper)` pairs.
    pub fn upper_series(&self) -> Vec<(usize, f64)> {
        self.forecasts.iter().map(|f| (f.sprint, f.upper)).collect()
    }

    pub fn lower_bounds(&self) -> Vec<f64> {
        self.forecasts.iter().map(|f| f.lower).collect()
    }

    pub fn upper_bounds(&self) -> Vec<f64> {
        self.forecasts.iter().map(|f| f.upper).collect()
    }
}

impl<'a> IntoIterator for &'a ForecastSeries {
    type Item = &'a Forecast;
    type IntoIter = std::slice::Iter<'a, Forecast>;

    fn into_iter(self) -> Self::IntoIter {
        self.forecasts.iter()
    }
}
