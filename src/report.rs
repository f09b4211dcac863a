//! # Multi-Day Forecast Report
//!
//! Builds the full set of published days from one payload: day 1 is the date
//! of the payload's current reading, day N is N-1 days later. Days the payload
//! does not reach yet become placeholders instead of failing the report.

use crate::attributes::{assemble_day_attributes, DayAttributes};
use crate::forecast::{CurrentConditions, MarinePayload};
use crate::partition::{partition, DayKey};
use crate::scoring::{rate, WaveScore};
use crate::{ForecastError, HeightUnit};
use chrono::{DateTime, FixedOffset};
use log::{debug, info, warn};
use serde::Serialize;

/// Maximum number of forecast days a report may request.
pub const MAX_FORECAST_DAYS: u32 = 7;

/// Parameters supplied by the presentation layer for one update cycle.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Identifier of the forecast location, e.g. `kirra_qld_australia`
    pub location: String,
    /// Number of days to publish, starting at the current day
    pub forecast_days: u32,
    /// Convert every height into this unit before partitioning
    pub display_unit: Option<HeightUnit>,
    /// Stamp written into every day's attributes
    pub updated_at: DateTime<FixedOffset>,
}

/// The current reading and its ratings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentReport {
    pub time: String,
    pub wave_height: f64,
    pub height_unit: HeightUnit,
    pub score: WaveScore,
}

/// One published forecast day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum DayReport {
    Available(DayAttributes),
    /// The payload's horizon has not reached this day yet
    Unavailable { day: DayKey },
}

impl DayReport {
    pub fn day(&self) -> DayKey {
        match self {
            DayReport::Available(attrs) => attrs.day,
            DayReport::Unavailable { day } => *day,
        }
    }
}

/// Everything derived from one payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastReport {
    pub location: String,
    pub current: Option<CurrentReport>,
    pub days: Vec<DayReport>,
}

/// Day key for the `offset`-th published day, where offset 1 is `anchor`.
///
/// ```
/// use swell_forecast_lib::{partition::DayKey, report::day_for_offset};
///
/// let anchor = DayKey::parse("20240616").unwrap();
/// assert_eq!(day_for_offset(anchor, 1), anchor);
/// assert_eq!(day_for_offset(anchor, 3).to_string(), "20240618");
/// ```
pub fn day_for_offset(anchor: DayKey, offset: u32) -> DayKey {
    anchor.plus_days(u64::from(offset.saturating_sub(1)))
}

fn current_report(current: &CurrentConditions, display_unit: Option<HeightUnit>) -> CurrentReport {
    let unit = display_unit.unwrap_or(current.unit);
    let wave_height = current.unit.convert(current.wave_height, unit);
    CurrentReport {
        time: current.time.clone(),
        wave_height,
        height_unit: unit,
        score: rate(wave_height, unit),
    }
}

/// Build the report for one update cycle.
///
/// Validation failures (missing arrays, mismatched lengths, bad timestamps or
/// units) fail the whole report. Days outside the horizon do not.
pub fn build_report(
    payload: &MarinePayload,
    options: &ReportOptions,
) -> Result<ForecastReport, ForecastError> {
    let raw = payload.raw_forecast()?;
    let current = payload.current_conditions()?;

    // Mixed-unit payloads are normalised to the wave unit
    let unit = options.display_unit.unwrap_or(raw.units().wave);
    let raw = if raw.units().wave == unit && raw.units().swell == unit {
        raw
    } else {
        debug!("converting forecast heights to {}", unit);
        raw.in_unit(unit)
    };

    let buckets = partition(&raw)?;
    debug!(
        "partitioned {} samples into {} days",
        buckets.sample_count(),
        buckets.len()
    );

    let anchor = match (&current, raw.times().first()) {
        (Some(current), _) => Some(DayKey::from_timestamp(&current.time)?),
        (None, Some(first)) => Some(DayKey::from_timestamp(first)?),
        (None, None) => None,
    };

    let forecast_days = options.forecast_days.clamp(1, MAX_FORECAST_DAYS);
    if forecast_days != options.forecast_days {
        warn!(
            "forecast_days {} out of range, using {}",
            options.forecast_days, forecast_days
        );
    }

    let mut days = Vec::new();
    if let Some(anchor) = anchor {
        for offset in 1..=forecast_days {
            let day = day_for_offset(anchor, offset);
            match assemble_day_attributes(&buckets, day, unit, options.updated_at) {
                Ok(attrs) => days.push(DayReport::Available(attrs)),
                Err(ForecastError::DayUnavailable(day)) => {
                    info!("{}: no forecast data for day {} yet", options.location, day);
                    days.push(DayReport::Unavailable { day });
                }
                Err(e) => return Err(e),
            }
        }
    } else {
        warn!("{}: payload has no timestamps", options.location);
    }

    Ok(ForecastReport {
        location: options.location.clone(),
        current: current.map(|c| current_report(&c, options.display_unit)),
        days,
    })
}
