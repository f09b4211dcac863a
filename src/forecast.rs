//! # Marine Payload Ingest
//!
//! This module decodes the hourly marine forecast document supplied by the data
//! source and validates it into a [`RawForecast`]. Fetching the document is the
//! caller's job; this crate only ever sees the decoded JSON text.
//!
//! ## Payload Shape
//!
//! The Open-Meteo marine endpoint returns parallel arrays keyed by hour:
//!
//! ```json
//! {
//!   "current": { "time": "2024-06-16T09:00", "wave_height": 1.32 },
//!   "current_units": { "wave_height": "m" },
//!   "hourly": {
//!     "time": ["2024-06-16T00:00", "2024-06-16T03:00"],
//!     "wave_height": [1.24, 1.31],
//!     "swell_wave_height": [0.96, 1.02]
//!   },
//!   "hourly_units": { "wave_height": "m", "swell_wave_height": "m" }
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every failure mode is a [`ForecastError`] variant:
//! - **Malformed JSON**: the document does not decode at all
//! - **Missing fields**: a required array or unit label is absent
//! - **Length mismatch**: the parallel arrays disagree on sample count
//! - **Bad timestamps / units**: values the partitioner cannot interpret
//! - **Day unavailable**: a requested day lies beyond the forecast horizon
//!
//! Validation failures reject the whole payload; nothing is partially built.

use crate::partition::DayKey;
use crate::{HeightUnit, RawForecast, SeriesUnits};
use log::debug;
use serde::Deserialize;
use std::{fs, io, path::Path};
use thiserror::Error;

/// Errors raised while ingesting a payload or assembling a day from it.
#[derive(Error, Debug)]
pub enum ForecastError {
    /// The payload is not valid JSON or has the wrong value types
    #[error("payload decode failed: {0}")]
    Json(#[from] serde_json::Error),

    /// A required array or unit label is absent
    #[error("payload is missing {0}")]
    MissingField(&'static str),

    /// A parallel series does not have one value per timestamp
    #[error("{field} has {found} values but there are {expected} timestamps")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    /// A timestamp could not be parsed as an ISO-8601 date and time
    #[error("invalid timestamp: {0}")]
    Timestamp(String),

    /// A unit label other than "ft" or "m"
    #[error("unknown height unit: {0:?}")]
    UnknownUnit(String),

    /// The requested day has not arrived in the payload's horizon yet
    #[error("no forecast data for day {0}")]
    DayUnavailable(DayKey),

    /// Reading a saved payload from disk failed
    #[error("payload IO: {0}")]
    Io(#[from] io::Error),
}

impl ForecastError {
    /// True for the "day not yet available" condition, which callers render
    /// as a placeholder instead of treating it as a broken payload.
    pub fn is_day_unavailable(&self) -> bool {
        matches!(self, ForecastError::DayUnavailable(_))
    }
}

/// The decoded marine document, before validation.
///
/// Every section is optional at this level so that a missing array surfaces
/// as [`ForecastError::MissingField`] rather than a generic decode error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarinePayload {
    #[serde(default)]
    pub current: Option<CurrentSection>,
    #[serde(default)]
    pub current_units: Option<CurrentUnitsSection>,
    #[serde(default)]
    pub hourly: Option<HourlySection>,
    #[serde(default)]
    pub hourly_units: Option<HourlyUnitsSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HourlySection {
    pub time: Option<Vec<String>>,
    pub wave_height: Option<Vec<f64>>,
    pub swell_wave_height: Option<Vec<f64>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HourlyUnitsSection {
    pub wave_height: Option<String>,
    pub swell_wave_height: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentSection {
    pub time: String,
    pub wave_height: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentUnitsSection {
    pub wave_height: Option<String>,
}

/// The "right now" reading that accompanies the hourly forecast.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub time: String,
    pub wave_height: f64,
    pub unit: HeightUnit,
}

/// Decode a payload document.
///
/// # Example
/// ```
/// use swell_forecast_lib::forecast::parse_payload;
///
/// let payload = parse_payload(r#"{
///     "hourly": {"time": ["2024-06-16T00:00"], "wave_height": [1.2], "swell_wave_height": [0.8]},
///     "hourly_units": {"wave_height": "m", "swell_wave_height": "m"}
/// }"#).unwrap();
/// assert_eq!(payload.raw_forecast().unwrap().len(), 1);
/// ```
pub fn parse_payload(json: &str) -> Result<MarinePayload, ForecastError> {
    let payload: MarinePayload = serde_json::from_str(json)?;
    debug!(
        "decoded marine payload with {} hourly timestamps",
        payload
            .hourly
            .as_ref()
            .and_then(|h| h.time.as_ref())
            .map_or(0, Vec::len)
    );
    Ok(payload)
}

/// Read and decode a payload previously saved to disk.
pub fn load_payload<P: AsRef<Path>>(path: P) -> Result<MarinePayload, ForecastError> {
    let contents = fs::read_to_string(&path)?;
    debug!("read payload from {}", path.as_ref().display());
    parse_payload(&contents)
}

impl MarinePayload {
    /// Validate the hourly section into a [`RawForecast`].
    pub fn raw_forecast(&self) -> Result<RawForecast, ForecastError> {
        let hourly = self
            .hourly
            .as_ref()
            .ok_or(ForecastError::MissingField("hourly"))?;
        let units = self
            .hourly_units
            .as_ref()
            .ok_or(ForecastError::MissingField("hourly_units"))?;

        let times = hourly
            .time
            .clone()
            .ok_or(ForecastError::MissingField("hourly.time"))?;
        let wave_height = hourly
            .wave_height
            .clone()
            .ok_or(ForecastError::MissingField("hourly.wave_height"))?;
        let swell_height = hourly
            .swell_wave_height
            .clone()
            .ok_or(ForecastError::MissingField("hourly.swell_wave_height"))?;

        let wave_unit = units
            .wave_height
            .as_deref()
            .ok_or(ForecastError::MissingField("hourly_units.wave_height"))?
            .parse()?;
        let swell_unit = units
            .swell_wave_height
            .as_deref()
            .ok_or(ForecastError::MissingField("hourly_units.swell_wave_height"))?
            .parse()?;

        RawForecast::new(
            times,
            wave_height,
            swell_height,
            SeriesUnits {
                wave: wave_unit,
                swell: swell_unit,
            },
        )
    }

    /// The current reading, if the payload carries a complete one.
    ///
    /// A `current` section without a wave height is treated as absent. The
    /// unit falls back to the hourly wave unit when `current_units` is missing.
    pub fn current_conditions(&self) -> Result<Option<CurrentConditions>, ForecastError> {
        let Some(current) = self.current.as_ref() else {
            return Ok(None);
        };
        let Some(wave_height) = current.wave_height else {
            return Ok(None);
        };

        let label = self
            .current_units
            .as_ref()
            .and_then(|u| u.wave_height.as_deref())
            .or_else(|| {
                self.hourly_units
                    .as_ref()
                    .and_then(|u| u.wave_height.as_deref())
            })
            .ok_or(ForecastError::MissingField("current_units.wave_height"))?;

        Ok(Some(CurrentConditions {
            time: current.time.clone(),
            wave_height,
            unit: label.parse()?,
        }))
    }
}
