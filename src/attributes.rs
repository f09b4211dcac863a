//! # Day Attribute Assembly
//!
//! Composes the partitioner, peak extractor and classifier into the attribute
//! set published for one forecast day:
//!
//! ```json
//! {
//!   "forecast": [{"time": "12am", "waveHeight": 1.24, "swellHeight": 0.96}, ...],
//!   "heightUnit": "m",
//!   "optimalWave": {
//!     "wave":  {"maxHeight": 1.8, "maxTime": "3pm", "max": "1.8m @ 3pm", "score": {...}},
//!     "swell": {"maxHeight": 1.2, "maxTime": "6pm", "max": "1.2m @ 6pm", "score": {...}}
//!   },
//!   "updatedAt": "2024-06-16T09:00:00+00:00"
//! }
//! ```
//!
//! Assembly is a pure function of the bucket snapshot and its parameters, so
//! repeated calls with the same inputs serialize identically.

use crate::partition::{DayKey, PerDayBuckets};
use crate::peak::{extract_peak, PeakSample};
use crate::scoring::{rate, WaveScore};
use crate::{ForecastError, HeightUnit, HourlySample, RawForecast, Series, SeriesUnits};
use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// Peak and rating for one series on one day.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeriesOptimum {
    #[serde(flatten)]
    pub peak: PeakSample,
    pub score: WaveScore,
}

impl SeriesOptimum {
    fn for_series(samples: &[HourlySample], series: Series, unit: HeightUnit) -> Self {
        let peak = extract_peak(samples, series, unit);
        let score = rate(peak.max_height, unit);
        SeriesOptimum { peak, score }
    }
}

/// The highest wave and the highest swell of a day, each with its rating.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OptimalWave {
    pub wave: SeriesOptimum,
    pub swell: SeriesOptimum,
}

/// Everything published for one forecast day.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayAttributes {
    pub day: DayKey,
    pub forecast: Vec<HourlySample>,
    pub height_unit: HeightUnit,
    pub optimal_wave: OptimalWave,
    pub updated_at: DateTime<FixedOffset>,
}

/// Assemble the attributes for `day`.
///
/// `unit` is the unit the bucketed heights are expressed in; it selects the
/// bound set used for rating and labels the peaks.
///
/// # Errors
/// [`ForecastError::DayUnavailable`] when the payload's horizon does not
/// reach `day` yet.
pub fn assemble_day_attributes(
    buckets: &PerDayBuckets,
    day: DayKey,
    unit: HeightUnit,
    updated_at: DateTime<FixedOffset>,
) -> Result<DayAttributes, ForecastError> {
    let samples = buckets.get(day).ok_or(ForecastError::DayUnavailable(day))?;

    Ok(DayAttributes {
        day,
        forecast: samples.to_vec(),
        height_unit: unit,
        optimal_wave: OptimalWave {
            wave: SeriesOptimum::for_series(samples, Series::Wave, unit),
            swell: SeriesOptimum::for_series(samples, Series::Swell, unit),
        },
        updated_at,
    })
}

impl RawForecast {
    /// A copy with both series expressed in `target`.
    ///
    /// Used when a report is requested in a different unit than the payload
    /// provides, or when the wave and swell series arrive in different units.
    pub fn in_unit(&self, target: HeightUnit) -> RawForecast {
        let convert = |heights: &[f64], from: HeightUnit| -> Vec<f64> {
            heights.iter().map(|&h| from.convert(h, target)).collect()
        };

        RawForecast {
            times: self.times.clone(),
            wave_height: convert(&self.wave_height, self.units.wave),
            swell_height: convert(&self.swell_height, self.units.swell),
            units: SeriesUnits {
                wave: target,
                swell: target,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::partition;

    fn updated_at() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2024-06-16T09:00:00+00:00").unwrap()
    }

    fn buckets(waves: &[f64], swells: &[f64]) -> PerDayBuckets {
        let times = (0..waves.len())
            .map(|i| format!("2024-06-16T{:02}:00", i * 3))
            .collect();
        let raw = RawForecast::new(
            times,
            waves.to_vec(),
            swells.to_vec(),
            SeriesUnits {
                wave: HeightUnit::Feet,
                swell: HeightUnit::Feet,
            },
        )
        .unwrap();
        partition(&raw).unwrap()
    }

    fn june16() -> DayKey {
        DayKey::parse("20240616").unwrap()
    }

    #[test]
    fn test_assembles_both_series() {
        let buckets = buckets(&[2.5, 5.0, 3.0], &[1.5, 1.2, 4.5]);
        let attrs =
            assemble_day_attributes(&buckets, june16(), HeightUnit::Feet, updated_at()).unwrap();

        assert_eq!(attrs.forecast.len(), 3);
        assert_eq!(attrs.height_unit, HeightUnit::Feet);

        let wave = &attrs.optimal_wave.wave;
        assert_eq!(wave.peak.max_height, 5.0);
        assert_eq!(wave.peak.label.as_deref(), Some("5.0ft @ 3am"));
        assert_eq!(wave.score.douglas_scale.unwrap().score, 4);
        // 5 ft is a face-scale edge
        assert!(wave.score.face_scale.is_none());

        let swell = &attrs.optimal_wave.swell;
        assert_eq!(swell.peak.max_time.as_deref(), Some("6am"));
        assert_eq!(swell.score.face_scale.unwrap().description, "Head high");
        assert_eq!(swell.score.douglas_scale.unwrap().description, "Moderate");
    }

    #[test]
    fn test_missing_day_is_unavailable() {
        let buckets = buckets(&[1.0], &[1.0]);
        let day = DayKey::parse("20240620").unwrap();
        let err = assemble_day_attributes(&buckets, day, HeightUnit::Feet, updated_at())
            .unwrap_err();
        assert!(err.is_day_unavailable());
    }

    #[test]
    fn test_flat_day_has_no_peak_label() {
        let buckets = buckets(&[0.0, 0.0], &[0.0, 0.0]);
        let attrs =
            assemble_day_attributes(&buckets, june16(), HeightUnit::Metres, updated_at()).unwrap();
        assert!(attrs.optimal_wave.wave.peak.label.is_none());
        assert!(attrs.optimal_wave.wave.score.douglas_scale.is_none());
    }

    #[test]
    fn test_serialized_keys() {
        let buckets = buckets(&[1.5], &[0.5]);
        let attrs =
            assemble_day_attributes(&buckets, june16(), HeightUnit::Metres, updated_at()).unwrap();
        let json = serde_json::to_value(&attrs).unwrap();

        assert_eq!(json["day"], "20240616");
        assert_eq!(json["heightUnit"], "m");
        assert_eq!(json["forecast"][0]["waveHeight"], 1.5);
        assert_eq!(json["optimalWave"]["wave"]["maxHeight"], 1.5);
        assert_eq!(json["optimalWave"]["wave"]["max"], "1.5m @ 12am");
        assert_eq!(
            json["optimalWave"]["wave"]["score"]["douglasScale"]["description"],
            "Moderate"
        );
        assert_eq!(
            json["optimalWave"]["swell"]["score"]["faceScale"]["scaleName"],
            "Face height scale"
        );
        assert_eq!(json["updatedAt"], "2024-06-16T09:00:00+00:00");
    }

    #[test]
    fn test_assembly_is_idempotent() {
        let buckets = buckets(&[1.0, 2.2, 1.4], &[0.7, 0.9, 0.8]);
        let first =
            assemble_day_attributes(&buckets, june16(), HeightUnit::Metres, updated_at()).unwrap();
        let second =
            assemble_day_attributes(&buckets, june16(), HeightUnit::Metres, updated_at()).unwrap();
        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
    }

    #[test]
    fn test_in_unit_converts_each_series_from_its_own_unit() {
        let raw = RawForecast::new(
            vec!["2024-06-16T00:00".into()],
            vec![10.0],
            vec![2.0],
            SeriesUnits {
                wave: HeightUnit::Feet,
                swell: HeightUnit::Metres,
            },
        )
        .unwrap();

        let metric = raw.in_unit(HeightUnit::Metres);
        assert!((metric.wave_height()[0] - 3.048).abs() < 1e-9);
        assert_eq!(metric.swell_height()[0], 2.0);
        assert_eq!(metric.units().wave, HeightUnit::Metres);
        assert_eq!(metric.units().swell, HeightUnit::Metres);
    }
}
