//! # Swell Forecast Core Library
//!
//! This library turns a marine forecast (hourly wave and swell heights over a
//! multi-day horizon) into per-day summaries: the hourly table for each day, the
//! highest wave and swell of the day, and a rating of those peaks against the
//! face-height scale and the Douglas sea scale.
//!
//! ## Design Philosophy
//!
//! ### Pure Functions Over Snapshots
//! - **No shared state**: every stage takes its input by reference and returns a
//!   fresh value; nothing is cached between update cycles
//! - **Deterministic**: the "updated at" stamp is a parameter, so assembling the
//!   same day twice produces identical output
//! - **Immutable buckets**: [`partition::PerDayBuckets`] is rebuilt from scratch
//!   on every payload and treated as read-only once built
//!
//! ### Data Flow
//! 1. **Ingest**: decode the Open-Meteo marine payload → [`RawForecast`]
//! 2. **Partition**: split the hourly series into calendar-day buckets
//! 3. **Peak**: find the first highest wave and swell sample of each day
//! 4. **Score**: rate each peak against both scales
//! 5. **Assemble**: publish a [`attributes::DayAttributes`] per requested day
//!
//! Network access, polling and persistence belong to the calling application.
//!
//! ## Core Types
//!
//! - [`HourlySample`]: one rounded forecast row for a single hour of one day
//! - [`RawForecast`]: the validated parallel series taken from a payload
//! - [`HeightUnit`]: feet or metres, the unit every height is expressed in

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod attributes;
pub mod config;
pub mod forecast;
pub mod partition;
pub mod peak;
pub mod renderer;
pub mod report;
pub mod scoring;

pub use forecast::ForecastError;

/// Metres per foot, used when a report is requested in a different unit than
/// the payload provides.
pub const METRES_PER_FOOT: f64 = 0.3048;

/// Measurement unit for a height series.
///
/// The payload labels each series with `"ft"` or `"m"`; every band table in
/// [`scoring`] carries bounds for both, so classification never converts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeightUnit {
    #[serde(rename = "ft")]
    Feet,
    #[serde(rename = "m")]
    Metres,
}

impl HeightUnit {
    /// Unit label as it appears in payloads and published attributes.
    pub fn as_str(&self) -> &'static str {
        match self {
            HeightUnit::Feet => "ft",
            HeightUnit::Metres => "m",
        }
    }

    /// Convert `height` expressed in `self` into `target`.
    ///
    /// ```
    /// use swell_forecast_lib::HeightUnit;
    ///
    /// let metres = HeightUnit::Feet.convert(10.0, HeightUnit::Metres);
    /// assert!((metres - 3.048).abs() < 1e-9);
    /// ```
    pub fn convert(&self, height: f64, target: HeightUnit) -> f64 {
        match (self, target) {
            (HeightUnit::Feet, HeightUnit::Metres) => height * METRES_PER_FOOT,
            (HeightUnit::Metres, HeightUnit::Feet) => height / METRES_PER_FOOT,
            _ => height,
        }
    }
}

impl fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeightUnit {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "ft" => Ok(HeightUnit::Feet),
            "m" => Ok(HeightUnit::Metres),
            other => Err(ForecastError::UnknownUnit(other.to_string())),
        }
    }
}

/// Units of the two height series in a payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesUnits {
    pub wave: HeightUnit,
    pub swell: HeightUnit,
}

/// Which height series a computation runs over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Series {
    Wave,
    Swell,
}

/// A single forecast row within one day's bucket.
///
/// Heights are already rounded to two decimal places. `time` is the 12-hour
/// clock label of the sample's local hour, e.g. `"3pm"` or `"12am"`.
///
/// # Example
/// ```
/// use swell_forecast_lib::{HourlySample, Series};
///
/// let sample = HourlySample { time: "6am".to_string(), wave_height: 1.2, swell_height: 0.9 };
/// assert_eq!(sample.height(Series::Swell), 0.9);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlySample {
    pub time: String,
    pub wave_height: f64,
    pub swell_height: f64,
}

impl HourlySample {
    pub fn height(&self, series: Series) -> f64 {
        match series {
            Series::Wave => self.wave_height,
            Series::Swell => self.swell_height,
        }
    }
}

/// Time-aligned wave and swell series taken from one payload.
///
/// The fields are private so that the parallel-length invariant can only be
/// established through [`RawForecast::new`].
#[derive(Clone, Debug, PartialEq)]
pub struct RawForecast {
    times: Vec<String>,
    wave_height: Vec<f64>,
    swell_height: Vec<f64>,
    units: SeriesUnits,
}

impl RawForecast {
    /// Build a forecast, rejecting series whose lengths differ from `times`.
    pub fn new(
        times: Vec<String>,
        wave_height: Vec<f64>,
        swell_height: Vec<f64>,
        units: SeriesUnits,
    ) -> Result<Self, ForecastError> {
        if wave_height.len() != times.len() {
            return Err(ForecastError::LengthMismatch {
                field: "wave_height",
                expected: times.len(),
                found: wave_height.len(),
            });
        }
        if swell_height.len() != times.len() {
            return Err(ForecastError::LengthMismatch {
                field: "swell_wave_height",
                expected: times.len(),
                found: swell_height.len(),
            });
        }

        Ok(RawForecast {
            times,
            wave_height,
            swell_height,
            units,
        })
    }

    pub fn times(&self) -> &[String] {
        &self.times
    }

    pub fn wave_height(&self) -> &[f64] {
        &self.wave_height
    }

    pub fn swell_height(&self) -> &[f64] {
        &self.swell_height
    }

    pub fn units(&self) -> SeriesUnits {
        self.units
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}
