//! # Wave Height Scoring
//!
//! Rates a height against two fixed tables:
//!
//! - **Face height scale**: surfer's terms relative to a standing rider,
//!   11 bands from "Ankle-shin" (1) to "Stupid big" (20)
//! - **Douglas sea scale**: the standard sea-state scale, 9 bands from
//!   "Calm" (1) to "Phenomenal" (9)
//!
//! Each band carries lower and upper bounds in both feet and metres, so a
//! height is always rated in the unit it was measured in.
//!
//! ## Matching Rule
//! Bands are scanned in order and the first band with
//! `lower < height < upper` wins. Both comparisons are strict, so a height
//! sitting exactly on a band edge (e.g. 0.30 m) matches no band and is
//! reported as unrated.

use crate::HeightUnit;
use serde::Serialize;

/// One row of a scoring table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub score: u8,
    pub min_ft: f64,
    pub max_ft: f64,
    pub min_m: f64,
    pub max_m: f64,
    pub description: &'static str,
}

impl Band {
    /// Bounds for `unit` as `(lower, upper)`
    pub fn bounds(&self, unit: HeightUnit) -> (f64, f64) {
        match unit {
            HeightUnit::Feet => (self.min_ft, self.max_ft),
            HeightUnit::Metres => (self.min_m, self.max_m),
        }
    }

    fn contains(&self, height: f64, unit: HeightUnit) -> bool {
        let (lower, upper) = self.bounds(unit);
        height > lower && height < upper
    }
}

const fn band(
    score: u8,
    feet: (f64, f64),
    metres: (f64, f64),
    description: &'static str,
) -> Band {
    Band {
        score,
        min_ft: feet.0,
        max_ft: feet.1,
        min_m: metres.0,
        max_m: metres.1,
        description,
    }
}

pub const FACE_SCALE: [Band; 11] = [
    band(1, (0.0, 1.0), (0.0, 0.30), "Ankle-shin"),
    band(2, (1.0, 2.0), (0.30, 0.60), "Knee-thigh"),
    band(3, (2.0, 3.0), (0.60, 0.91), "Waist-belly"),
    band(4, (3.0, 4.0), (0.91, 1.21), "Chest-shoulder"),
    band(5, (4.0, 5.0), (1.21, 1.52), "Head high"),
    band(6, (5.0, 6.0), (1.52, 1.82), "1' overhead"),
    band(8, (6.0, 8.0), (1.82, 2.43), "3' overhead"),
    band(10, (8.0, 10.0), (2.43, 3.04), "3' overhead"),
    band(12, (10.0, 12.0), (3.04, 3.65), "2x overhead"),
    band(15, (12.0, 15.0), (3.65, 4.57), "3x overhead"),
    band(20, (15.0, 100.0), (4.57, 100.0), "Stupid big"),
];

pub const DOUGLAS_SCALE: [Band; 9] = [
    band(1, (0.0, 0.32), (0.0, 0.10), "Calm"),
    band(2, (0.32, 1.64), (0.10, 0.50), "Smooth"),
    band(3, (1.64, 4.10), (0.50, 1.25), "Slight"),
    band(4, (4.10, 8.20), (1.25, 2.50), "Moderate"),
    band(5, (8.20, 13.12), (2.50, 4.00), "Rough"),
    band(6, (13.12, 19.68), (4.00, 6.00), "Very Rough"),
    band(7, (19.68, 29.52), (6.00, 9.00), "High"),
    band(8, (29.52, 45.93), (9.00, 14.00), "Very high"),
    band(9, (45.93, 200.0), (14.00, 200.0), "Phenomenal"),
];

/// A scoring table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scale {
    WaveFace,
    Douglas,
}

impl Scale {
    pub fn name(&self) -> &'static str {
        match self {
            Scale::WaveFace => "Face height scale",
            Scale::Douglas => "Douglas sea scale",
        }
    }

    pub fn bands(&self) -> &'static [Band] {
        match self {
            Scale::WaveFace => &FACE_SCALE,
            Scale::Douglas => &DOUGLAS_SCALE,
        }
    }
}

/// Result of rating one height against one scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleRating {
    pub score: u8,
    pub description: &'static str,
    pub scale_name: &'static str,
}

/// Ratings of one height against both scales.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaveScore {
    pub douglas_scale: Option<ScaleRating>,
    pub face_scale: Option<ScaleRating>,
}

/// Rate `height` (already in `unit`) against `scale`.
///
/// Returns `None` when the height lies outside every band, including exactly
/// on a band edge. That is an unrated reading, not an error.
///
/// # Example
/// ```
/// use swell_forecast_lib::{scoring::{classify, Scale}, HeightUnit};
///
/// let rating = classify(5.0, HeightUnit::Feet, Scale::Douglas).unwrap();
/// assert_eq!((rating.score, rating.description), (4, "Moderate"));
/// assert!(classify(0.30, HeightUnit::Metres, Scale::WaveFace).is_none());
/// ```
pub fn classify(height: f64, unit: HeightUnit, scale: Scale) -> Option<ScaleRating> {
    scale
        .bands()
        .iter()
        .find(|band| band.contains(height, unit))
        .map(|band| ScaleRating {
            score: band.score,
            description: band.description,
            scale_name: scale.name(),
        })
}

/// Rate `height` against both the Douglas and face-height scales.
pub fn rate(height: f64, unit: HeightUnit) -> WaveScore {
    WaveScore {
        douglas_scale: classify(height, unit, Scale::Douglas),
        face_scale: classify(height, unit, Scale::WaveFace),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score_of(height: f64, unit: HeightUnit, scale: Scale) -> Option<(u8, &'static str)> {
        classify(height, unit, scale).map(|r| (r.score, r.description))
    }

    #[test]
    fn test_metric_boundary_is_unrated() {
        assert_eq!(score_of(0.30, HeightUnit::Metres, Scale::WaveFace), None);
        assert_eq!(
            score_of(0.31, HeightUnit::Metres, Scale::WaveFace),
            Some((2, "Knee-thigh"))
        );
    }

    #[test]
    fn test_douglas_feet() {
        assert_eq!(
            score_of(5.0, HeightUnit::Feet, Scale::Douglas),
            Some((4, "Moderate"))
        );
        assert_eq!(
            score_of(9.0, HeightUnit::Feet, Scale::Douglas),
            Some((5, "Rough"))
        );
        assert_eq!(score_of(4.10, HeightUnit::Feet, Scale::Douglas), None);
    }

    #[test]
    fn test_integer_foot_transitions_are_gaps() {
        for feet in [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 8.0, 10.0, 12.0, 15.0] {
            assert_eq!(
                score_of(feet, HeightUnit::Feet, Scale::WaveFace),
                None,
                "{} ft sits on a face-scale edge",
                feet
            );
        }
    }

    #[test]
    fn test_zero_and_out_of_range_are_unrated() {
        for scale in [Scale::WaveFace, Scale::Douglas] {
            assert!(classify(0.0, HeightUnit::Metres, scale).is_none());
            assert!(classify(-1.0, HeightUnit::Feet, scale).is_none());
            assert!(classify(500.0, HeightUnit::Feet, scale).is_none());
        }
    }

    #[test]
    fn test_top_bands() {
        assert_eq!(
            score_of(4.0, HeightUnit::Metres, Scale::WaveFace),
            Some((15, "3x overhead"))
        );
        assert_eq!(
            score_of(9.0, HeightUnit::Metres, Scale::WaveFace),
            Some((20, "Stupid big"))
        );
        assert_eq!(
            score_of(20.0, HeightUnit::Metres, Scale::Douglas),
            Some((9, "Phenomenal"))
        );
    }

    #[test]
    fn test_tables_are_ordered_and_non_overlapping() {
        for scale in [Scale::WaveFace, Scale::Douglas] {
            for unit in [HeightUnit::Feet, HeightUnit::Metres] {
                for pair in scale.bands().windows(2) {
                    let (lo0, hi0) = pair[0].bounds(unit);
                    let (lo1, hi1) = pair[1].bounds(unit);
                    assert!(lo0 < hi0, "{:?} {:?} band {} is empty", scale, unit, pair[0].score);
                    assert!(lo1 < hi1, "{:?} {:?} band {} is empty", scale, unit, pair[1].score);
                    assert_eq!(hi0, lo1, "{:?} {:?} bands must be contiguous", scale, unit);
                    assert!(pair[0].score < pair[1].score);
                }
            }
        }
    }

    #[test]
    fn test_table_sizes_and_spans() {
        assert_eq!(FACE_SCALE.len(), 11);
        assert_eq!(DOUGLAS_SCALE.len(), 9);
        assert_eq!(FACE_SCALE[10].bounds(HeightUnit::Feet), (15.0, 100.0));
        assert_eq!(DOUGLAS_SCALE[8].bounds(HeightUnit::Metres), (14.0, 200.0));
    }

    #[test]
    fn test_rate_uses_both_scales() {
        let score = rate(1.0, HeightUnit::Metres);
        let douglas = score.douglas_scale.unwrap();
        let face = score.face_scale.unwrap();
        assert_eq!((douglas.score, douglas.scale_name), (3, "Douglas sea scale"));
        assert_eq!((face.score, face.scale_name), (4, "Face height scale"));
    }
}
