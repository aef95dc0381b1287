//! Model module containing data structures

mod classification;
mod forecast;
mod observation;
mod overlap_band;

pub use classification::{Band, BandCounts, ClassifiedObservation};
pub use forecast::{Forecast, ForecastSeries};
pub use observation::Observation;
pub use overlap_band::OverlapBand;
