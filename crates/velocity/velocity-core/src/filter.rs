//! Observation filtering
//!
//! Splits a chronological series into the valid values used for forecasting
//! and the invalid ones that are only reported.

use velocity_spi::{Observation, Result, VelocityError};

/// Decode a signed series (negative marks invalid) into observations.
///
/// Fails on the first non-finite value; `position` in the error is the
/// 1-based sprint number.
pub fn observations_from_signed(values: &[f64]) -> Result<Vec<Observation>> {
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            Observation::from_signed(value).ok_or(VelocityError::InvalidObservation {
                position: i + 1,
                value,
            })
        })
        .collect()
}

/// Check that every observation carries a finite, non-negative velocity.
///
/// Observations built directly or deserialized bypass the signed decoder, so
/// this is the guard before anything sorts or sums them.
pub fn check_observations(observations: &[Observation]) -> Result<()> {
    match observations
        .iter()
        .enumerate()
        .find(|(_, o)| !(o.value().is_finite() && o.value() >= 0.0))
    {
        Some((i, o)) => Err(VelocityError::InvalidObservation {
            position: i + 1,
            value: o.value(),
        }),
        None => Ok(()),
    }
}

/// Valid values in `observations[..=index]`, in chronological order.
///
/// An `index` past the end covers the whole series.
pub fn valid_prefix(observations: &[Observation], index: usize) -> Vec<f64> {
    let end = index.saturating_add(1).min(observations.len());
    observations[..end]
        .iter()
        .filter_map(|o| o.valid_value())
        .collect()
}

/// Same as [`valid_prefix`], sorted ascending.
pub fn valid_prefix_sorted(observations: &[Observation], index: usize) -> Vec<f64> {
    let mut values = valid_prefix(observations, index);
    values.sort_by(f64::total_cmp);
    values
}

pub fn valid_count(observations: &[Observation]) -> usize {
    observations.iter().filter(|o| o.is_valid()).count()
}

/// `(valid, invalid)` lists of `(sprint, value)` pairs, sprints 1-based.
pub fn partition(observations: &[Observation]) -> (Vec<(usize, f64)>, Vec<(usize, f64)>) {
    let mut valid = Vec::new();
    let mut invalid = Vec::new();
    for (i, obs) in observations.iter().enumerate() {
        match *obs {
            Observation::Valid(v) => valid.push((i + 1, v)),
            Observation::Invalid(v) => invalid.push((i + 1, v)),
        }
    }
    (valid, invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Observation> {
        observations_from_signed(&[-22.0, -53.0, 28.0, 19.0, 32.0]).unwrap()
    }

    #[test]
    fn test_valid_prefix_keeps_order() {
        let obs = sample();
        assert_eq!(valid_prefix(&obs, 4), vec![28.0, 19.0, 32.0]);
        assert_eq!(valid_prefix(&obs, 3), vec![28.0, 19.0]);
        assert!(valid_prefix(&obs, 1).is_empty());
    }

    #[test]
    fn test_valid_prefix_sorted() {
        let obs = sample();
        assert_eq!(valid_prefix_sorted(&obs, 4), vec![19.0, 28.0, 32.0]);
    }

    #[test]
    fn test_index_past_end_covers_everything() {
        let obs = sample();
        assert_eq!(valid_prefix(&obs, 100), valid_prefix(&obs, 4));
        assert_eq!(valid_prefix(&obs, usize::MAX).len(), 3);
    }

    #[test]
    fn test_valid_prefix_size_non_decreasing() {
        let obs = observations_from_signed(&[
            -22.0, -53.0, 28.0, 19.0, 32.0, 5.0, 20.0, -2.0, 20.0, 20.0,
        ])
        .unwrap();

        let sizes: Vec<usize> = (0..obs.len()).map(|i| valid_prefix(&obs, i).len()).collect();
        assert!(sizes.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*sizes.last().unwrap(), valid_count(&obs));
    }

    #[test]
    fn test_partition_sprint_numbers() {
        let (valid, invalid) = partition(&sample());
        assert_eq!(valid, vec![(3, 28.0), (4, 19.0), (5, 32.0)]);
        assert_eq!(invalid, vec![(1, 22.0), (2, 53.0)]);
    }

    #[test]
    fn test_non_finite_reports_position() {
        let err = observations_from_signed(&[1.0, 2.0, f64::INFINITY]).unwrap_err();
        assert!(matches!(
            err,
            VelocityError::InvalidObservation { position: 3, .. }
        ));
    }

    #[test]
    fn test_check_observations_rejects_out_of_domain_values() {
        assert!(check_observations(&sample()).is_ok());
        assert!(check_observations(&[Observation::Invalid(0.0)]).is_ok());

        let err = check_observations(&[Observation::Valid(10.0), Observation::Valid(-5.0)])
            .unwrap_err();
        assert_eq!(
            err,
            VelocityError::InvalidObservation {
                position: 2,
                value: -5.0,
            }
        );

        let err = check_observations(&[Observation::Valid(3.0), Observation::Invalid(f64::INFINITY)])
            .unwrap_err();
        assert!(matches!(err, VelocityError::InvalidObservation { position: 2, .. }));

        let err = check_observations(&[Observation::Valid(f64::NAN)]).unwrap_err();
        assert!(matches!(err, VelocityError::InvalidObservation { position: 1, .. }));
    }

    #[test]
    fn test_empty_series() {
        let obs = observations_from_signed(&[]).unwrap();
        assert!(obs.is_empty());
        assert!(valid_prefix(&obs, 0).is_empty());
        assert_eq!(valid_count(&obs), 0);
    }
}
