//! Unit-level tests through the facade surface

use velocity_facade::interval::{lower_index, upper_index};
use velocity_facade::{IntervalEstimator, Observation, RankIntervalEstimator};

// ============================================================================
// Interval Index Tests
// ============================================================================

#[test]
fn test_index_ordering_holds_for_all_sizes() {
    for n in 1..1000 {
        assert!(lower_index(n) <= upper_index(n));
    }
}

#[test]
fn test_seven_observation_example() {
    assert_eq!(lower_index(7), 1);
    assert_eq!(upper_index(7), 5);

    let sorted = vec![5.0, 19.0, 20.0, 20.0, 23.0, 24.0, 36.0];
    let (lower, upper) = RankIntervalEstimator::default().interval(&sorted).unwrap();
    assert_eq!((lower, upper), (19.0, 24.0));
}

#[test]
fn test_small_samples_span_observed_range() {
    let estimator = RankIntervalEstimator::default();
    let sorted = vec![3.0, 8.0, 13.0, 21.0, 34.0, 55.0];

    for n in 1..=sorted.len() {
        let (lower, upper) = estimator.interval(&sorted[..n]).unwrap();
        assert_eq!(lower, sorted[0]);
        assert_eq!(upper, sorted[n - 1]);
    }
}

// ============================================================================
// Observation Tests
// ============================================================================

#[test]
fn test_signed_notation() {
    assert_eq!(Observation::from_signed(-53.0), Some(Observation::Invalid(53.0)));
    assert_eq!(Observation::from_signed(36.0), Some(Observation::Valid(36.0)));
    assert_eq!(Observation::from_signed(-0.0), Some(Observation::Invalid(0.0)));
}
