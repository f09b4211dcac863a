//! Peak extraction: the highest sample of one series within a day's bucket.

use crate::{HeightUnit, HourlySample, Series};
use serde::Serialize;

/// The highest sample of one series in a day.
///
/// `max_time` and `label` are `None` when no sample rose above zero.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeakSample {
    pub max_height: f64,
    pub max_time: Option<String>,
    /// Human-readable peak, e.g. `"1.8m @ 3pm"`
    #[serde(rename = "max")]
    pub label: Option<String>,
}

/// Format a height the way published labels show it: whole numbers keep one
/// decimal place (`9.0`), everything else prints as stored (`1.25`).
pub fn format_height(height: f64) -> String {
    if height.fract() == 0.0 {
        format!("{:.1}", height)
    } else {
        format!("{}", height)
    }
}

/// Find the peak of `series` across `samples`.
///
/// The scan keeps the first sample that is strictly greater than everything
/// before it, so ties resolve to the earliest hour. The starting maximum is
/// zero: a bucket where every height is zero or negative reports a height of
/// `0` with no time and no label.
///
/// # Example
/// ```
/// use swell_forecast_lib::{peak::extract_peak, HeightUnit, HourlySample, Series};
///
/// let day = vec![
///     HourlySample { time: "6am".into(), wave_height: 1.5, swell_height: 1.0 },
///     HourlySample { time: "9am".into(), wave_height: 1.8, swell_height: 1.0 },
/// ];
/// let peak = extract_peak(&day, Series::Wave, HeightUnit::Metres);
/// assert_eq!(peak.label.as_deref(), Some("1.8m @ 9am"));
/// ```
pub fn extract_peak(samples: &[HourlySample], series: Series, unit: HeightUnit) -> PeakSample {
    let mut peak = PeakSample {
        max_height: 0.0,
        max_time: None,
        label: None,
    };

    for sample in samples {
        let height = sample.height(series);
        if height > peak.max_height {
            peak.max_height = height;
            peak.max_time = Some(sample.time.clone());
            peak.label = Some(format!(
                "{}{} @ {}",
                format_height(height),
                unit,
                sample.time
            ));
        }
    }

    peak
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test helper: samples labelled "h0", "h1", ... with the given wave heights
    fn samples(waves: &[f64]) -> Vec<HourlySample> {
        waves
            .iter()
            .enumerate()
            .map(|(i, &wave)| HourlySample {
                time: format!("h{}", i),
                wave_height: wave,
                swell_height: wave / 2.0,
            })
            .collect()
    }

    #[test]
    fn test_first_peak_wins_ties() {
        let peak = extract_peak(&samples(&[3.0, 5.0, 5.0, 2.0]), Series::Wave, HeightUnit::Feet);
        assert_eq!(peak.max_height, 5.0);
        assert_eq!(peak.max_time.as_deref(), Some("h1"));
        assert_eq!(peak.label.as_deref(), Some("5.0ft @ h1"));
    }

    #[test]
    fn test_all_zero_series_has_no_label() {
        let peak = extract_peak(&samples(&[0.0, 0.0, 0.0]), Series::Wave, HeightUnit::Metres);
        assert_eq!(peak.max_height, 0.0);
        assert!(peak.max_time.is_none());
        assert!(peak.label.is_none());
    }

    #[test]
    fn test_all_negative_series_reports_zero() {
        let peak = extract_peak(&samples(&[-1.0, -0.5]), Series::Wave, HeightUnit::Metres);
        assert_eq!(peak.max_height, 0.0);
        assert!(peak.label.is_none());
    }

    #[test]
    fn test_empty_bucket() {
        let peak = extract_peak(&[], Series::Swell, HeightUnit::Metres);
        assert_eq!(peak.max_height, 0.0);
        assert!(peak.max_time.is_none());
    }

    #[test]
    fn test_swell_series_is_independent() {
        let mut day = samples(&[1.0, 4.0, 2.0]);
        day[2].swell_height = 3.5;
        let peak = extract_peak(&day, Series::Swell, HeightUnit::Metres);
        assert_eq!(peak.max_height, 3.5);
        assert_eq!(peak.max_time.as_deref(), Some("h2"));
        assert_eq!(peak.label.as_deref(), Some("3.5m @ h2"));
    }

    #[test]
    fn test_format_height() {
        assert_eq!(format_height(9.0), "9.0");
        assert_eq!(format_height(1.25), "1.25");
        assert_eq!(format_height(0.3), "0.3");
    }
}
