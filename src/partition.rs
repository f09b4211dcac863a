//! # Day Partitioning
//!
//! Splits a [`RawForecast`] into one bucket of [`HourlySample`]s per calendar
//! day. The day and hour of each sample are read from the wall clock of the
//! timestamp itself (the forecast's reference timezone), never converted into
//! the machine's local zone.
//!
//! ## Timestamp Formats
//! - `2024-06-16T03:00` (Open-Meteo default, no zone designator)
//! - `2024-06-16T03:00:00`
//! - either of the above followed by `Z` or a `+10:00` style offset
//!
//! Bucket contents keep payload order, which the peak extractor relies on for
//! its first-wins tie-break.

use crate::{ForecastError, HourlySample, RawForecast};
use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, Timelike};
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Key format used for day buckets, e.g. `20240616`.
pub const DAY_KEY_FORMAT: &str = "%Y%m%d";

/// Calendar date identifying one day bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub fn new(date: NaiveDate) -> Self {
        DayKey(date)
    }

    /// Parse a `YYYYMMDD` key.
    pub fn parse(key: &str) -> Result<Self, ForecastError> {
        NaiveDate::parse_from_str(key, DAY_KEY_FORMAT)
            .map(DayKey)
            .map_err(|_| ForecastError::Timestamp(key.to_string()))
    }

    /// Day key of an ISO-8601 timestamp.
    pub fn from_timestamp(timestamp: &str) -> Result<Self, ForecastError> {
        parse_local_timestamp(timestamp).map(|dt| DayKey(dt.date()))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The day `days` after this one. Saturates at the last representable date.
    pub fn plus_days(&self, days: u64) -> Self {
        DayKey(self.0.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX))
    }

    /// Long-form date for display, e.g. "Sunday, June 16, 2024".
    pub fn readable(&self) -> String {
        self.0.format("%A, %B %d, %Y").to_string()
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DAY_KEY_FORMAT))
    }
}

impl Serialize for DayKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Hourly samples grouped by calendar day.
///
/// Built once per payload by [`partition`] and never mutated afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerDayBuckets {
    days: HashMap<DayKey, Vec<HourlySample>>,
}

impl PerDayBuckets {
    pub fn get(&self, day: DayKey) -> Option<&[HourlySample]> {
        self.days.get(&day).map(Vec::as_slice)
    }

    /// Day keys in ascending date order.
    pub fn days(&self) -> Vec<DayKey> {
        let mut keys: Vec<DayKey> = self.days.keys().copied().collect();
        keys.sort();
        keys
    }

    /// Number of day buckets.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Total number of samples across every bucket.
    pub fn sample_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }
}

/// Parse an ISO-8601 timestamp, keeping its own wall-clock date and hour.
///
/// Offsets (including `Z`) are accepted but not applied: `2024-06-16T23:00+10:00`
/// belongs to June 16, hour 23.
pub fn parse_local_timestamp(timestamp: &str) -> Result<NaiveDateTime, ForecastError> {
    let trimmed = timestamp.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.naive_local());
    }
    if let Ok(dt) = DateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M%#z") {
        return Ok(dt.naive_local());
    }

    let naive = trimmed.strip_suffix('Z').unwrap_or(trimmed);
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(naive, fmt).ok())
        .ok_or_else(|| ForecastError::Timestamp(timestamp.to_string()))
}

/// 12-hour clock label for an hour of the day: `0 → "12am"`, `12 → "12pm"`,
/// `15 → "3pm"`. No leading zero.
pub fn time_label(hour: u32) -> String {
    match hour {
        0 => "12am".to_string(),
        1..=11 => format!("{}am", hour),
        12 => "12pm".to_string(),
        _ => format!("{}pm", hour - 12),
    }
}

/// Round to two decimal places for publication.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Split a forecast into per-day buckets.
///
/// Every sample lands in exactly one bucket, and an empty forecast yields an
/// empty mapping. A single unparseable timestamp fails the whole partition.
///
/// # Example
/// ```
/// use swell_forecast_lib::{partition::{partition, DayKey}, HeightUnit, RawForecast, SeriesUnits};
///
/// let raw = RawForecast::new(
///     vec!["2024-06-16T21:00".into(), "2024-06-17T00:00".into()],
///     vec![1.234, 1.5],
///     vec![0.9, 1.0],
///     SeriesUnits { wave: HeightUnit::Metres, swell: HeightUnit::Metres },
/// ).unwrap();
///
/// let buckets = partition(&raw).unwrap();
/// let june16 = buckets.get(DayKey::parse("20240616").unwrap()).unwrap();
/// assert_eq!(june16[0].time, "9pm");
/// assert_eq!(june16[0].wave_height, 1.23);
/// ```
pub fn partition(raw: &RawForecast) -> Result<PerDayBuckets, ForecastError> {
    let mut days: HashMap<DayKey, Vec<HourlySample>> = HashMap::new();

    for (index, timestamp) in raw.times().iter().enumerate() {
        let local = parse_local_timestamp(timestamp)?;

        days.entry(DayKey(local.date()))
            .or_default()
            .push(HourlySample {
                time: time_label(local.hour()),
                wave_height: round2(raw.wave_height()[index]),
                swell_height: round2(raw.swell_height()[index]),
            });
    }

    Ok(PerDayBuckets { days })
}
