//! Overlap band across forecast intervals
//!
//! When every interval shares a common range, the band is the highest lower
//! bound to the lowest upper bound. Otherwise the extremes are dropped
//! alternately (one low upper bound, then one high lower bound) until the
//! remaining extremes overlap.
//!
//! For intervals with `lower <= upper` the search always stops at or before
//! the largest upper bound, which is never below the largest lower bound.
//! Arbitrary inputs may exhaust both lists, in which case there is no band.

use tracing::trace;
use velocity_spi::{ForecastSeries, OverlapBand};

/// Overlap band of intervals given as parallel bound lists.
///
/// Returns `None` for empty input or when trimming runs out of bounds.
pub fn overlap_band(lowers: &[f64], uppers: &[f64]) -> Option<OverlapBand> {
    if lowers.is_empty() || uppers.is_empty() {
        return None;
    }

    let max_lower = lowers.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min_upper = uppers.iter().copied().fold(f64::INFINITY, f64::min);
    if min_upper >= max_lower {
        return Some(OverlapBand {
            lower: max_lower,
            upper: min_upper,
            trimmed_lower: 0,
            trimmed_upper: 0,
        });
    }

    let mut lowers = lowers.to_vec();
    let mut uppers = uppers.to_vec();
    lowers.sort_by(f64::total_cmp);
    uppers.sort_by(f64::total_cmp);

    // `j` indexes uppers from the bottom, `i` counts lowers from the top.
    let (mut i, mut j) = (1usize, 1usize);
    while j < uppers.len() && i <= lowers.len() {
        let upper = uppers[j];
        let lower = lowers[lowers.len() - i];
        if upper >= lower {
            return Some(OverlapBand {
                lower,
                upper,
                trimmed_lower: i - 1,
                trimmed_upper: j,
            });
        }
        trace!(lower, upper, i, j, "no overlap yet, trimming");
        if i == j {
            i += 1;
        } else {
            j += 1;
        }
    }
    None
}

/// Overlap band of every interval in `forecasts`.
pub fn forecast_overlap(forecasts: &ForecastSeries) -> Option<OverlapBand> {
    overlap_band(&forecasts.lower_bounds(), &forecasts.upper_bounds())
}
