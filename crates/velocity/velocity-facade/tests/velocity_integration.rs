//! Integration tests for the velocity forecasting crates

use velocity_facade::filter::{valid_prefix, valid_prefix_sorted};
use velocity_facade::prelude::*;

fn sample() -> Vec<Observation> {
    observations_from_signed(&[
        -22.0, -53.0, 28.0, 19.0, 32.0, 5.0, 20.0, -2.0, 20.0, 20.0, 25.0, 36.0, 37.0, 36.0, 5.0,
        29.0, 45.0, 24.0, 23.0,
    ])
    .unwrap()
}

#[test]
fn test_prefix_example() {
    let obs = sample();
    assert_eq!(valid_prefix(&obs, 4), vec![28.0, 19.0, 32.0]);
    assert_eq!(valid_prefix_sorted(&obs, 4), vec![19.0, 28.0, 32.0]);
}

#[test]
fn test_forecast_for_each_prefix_with_history() {
    let obs = sample();
    let series = IncrementalForecaster::new().forecast(&obs).unwrap();

    // first forecast after sprint 4, one per sprint from then on
    assert_eq!(series.len(), obs.len() - 3);
    for (k, f) in series.iter().enumerate() {
        assert_eq!(f.observed_through, 4 + k);
        assert_eq!(f.sprint, f.observed_through + 1);
        assert!(f.lower <= f.mean && f.mean <= f.upper);
    }
}

#[test]
fn test_sample_sizes_non_decreasing() {
    let series = IncrementalForecaster::new().forecast(&sample()).unwrap();
    let sizes: Vec<usize> = series.iter().map(|f| f.sample_size).collect();
    assert!(sizes.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_classification_uses_only_prior_forecast() {
    let obs = sample();
    let forecasts = IncrementalForecaster::new().forecast(&obs).unwrap();
    let timeline = PriorForecastClassifier::new().classify(&obs, &forecasts);

    for c in timeline.iter().filter(|c| {
        matches!(c.band, Band::Below | Band::Within | Band::Above)
    }) {
        let f = forecasts.for_sprint(c.sprint).unwrap();
        assert!(f.observed_through < c.sprint);

        // recomputing from history strictly before the sprint gives the same interval
        let history = valid_prefix_sorted(&obs, c.sprint - 2);
        let (lower, upper) = RankIntervalEstimator::default().interval(&history).unwrap();
        assert_eq!((f.lower, f.upper), (lower, upper));
    }
}

#[test]
fn test_buckets_mutually_exclusive_and_exhaustive() {
    let obs = sample();
    let analysis = analyze(&obs, &ForecastConfig::default()).unwrap();

    let mut sprints: Vec<usize> = analysis.timeline.iter().map(|c| c.sprint).collect();
    sprints.sort_unstable();
    assert_eq!(sprints, (1..=obs.len()).collect::<Vec<_>>());

    let per_band: usize = Band::ALL.iter().map(|&b| analysis.counts.get(b)).sum();
    assert_eq!(per_band, obs.len());
}

#[test]
fn test_custom_estimator_plugs_into_forecaster() {
    /// Always the full observed range.
    struct MinMax;

    impl IntervalEstimator for MinMax {
        fn indexes(&self, n: usize) -> Result<(usize, usize)> {
            if n == 0 {
                return Err(VelocityError::InsufficientData { required: 1, actual: 0 });
            }
            Ok((0, n - 1))
        }
    }

    let obs = sample();
    let series = IncrementalForecaster::with_estimator(MinMax, 2)
        .forecast(&obs)
        .unwrap();
    let latest = series.latest().unwrap();
    assert_eq!((latest.lower, latest.upper), (5.0, 45.0));
}

#[test]
fn test_higher_confidence_widens_interval() {
    let obs = sample();
    let narrow = analyze(&obs, &ForecastConfig::default()).unwrap();
    let wide = analyze(
        &obs,
        &ForecastConfig::builder().confidence_level(0.99).build().unwrap(),
    )
    .unwrap();

    let n = narrow.next_forecast().unwrap();
    let w = wide.next_forecast().unwrap();
    assert!(w.lower <= n.lower);
    assert!(w.upper >= n.upper);
    assert_eq!(w.mean, n.mean);
}
