//! Observation classifiers

use velocity_spi::{
    Band, ClassifiedObservation, Forecast, ForecastSeries, Observation, ObservationClassifier,
};

/// Band of a valid `value` relative to `forecast`.
pub fn band_for(value: f64, forecast: &Forecast) -> Band {
    if value < forecast.lower {
        Band::Below
    } else if value > forecast.upper {
        Band::Above
    } else {
        Band::Within
    }
}

// ============================================================================
// Timeline
// ============================================================================

/// Classifies each sprint against the forecast made just before it.
///
/// Sprints without such a forecast (too little valid history) are
/// [`Band::Unclassified`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorForecastClassifier;

impl PriorForecastClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl ObservationClassifier for PriorForecastClassifier {
    fn classify(
        &self,
        observations: &[Observation],
        forecasts: &ForecastSeries,
    ) -> Vec<ClassifiedObservation> {
        observations
            .iter()
            .enumerate()
            .map(|(i, &obs)| {
                let sprint = i + 1;
                let band = match obs {
                    Observation::Invalid(_) => Band::Invalid,
                    Observation::Valid(v) => forecasts
                        .for_sprint(sprint)
                        .map_or(Band::Unclassified, |f| band_for(v, f)),
                };
                ClassifiedObservation {
                    sprint,
                    value: obs.value(),
                    band,
                }
            })
            .collect()
    }
}

// ============================================================================
// Distribution
// ============================================================================

/// Orders all observations by velocity and classifies each valid one against
/// the most recent forecast.
///
/// This is the interval drawn for the next sprint, not the one made before
/// the last sprint; the view answers "how does the whole history sit against
/// today's forecast". Entries keep their original sprint number; ties keep
/// chronological order.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatestForecastClassifier;

impl LatestForecastClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl ObservationClassifier for LatestForecastClassifier {
    fn classify(
        &self,
        observations: &[Observation],
        forecasts: &ForecastSeries,
    ) -> Vec<ClassifiedObservation> {
        let latest = forecasts.latest();
        let mut classified: Vec<ClassifiedObservation> = observations
            .iter()
            .enumerate()
            .map(|(i, &obs)| {
                let band = match (obs, latest) {
                    (Observation::Invalid(_), _) => Band::Invalid,
                    (Observation::Valid(_), None) => Band::Unclassified,
                    (Observation::Valid(v), Some(f)) => band_for(v, f),
                };
                ClassifiedObservation {
                    sprint: i + 1,
                    value: obs.value(),
                    band,
                }
            })
            .collect();
        classified.sort_by(|a, b| a.value.total_cmp(&b.value));
        classified
    }
}
