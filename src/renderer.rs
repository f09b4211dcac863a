//! # Forecast Text Rendering
//!
//! Renders a [`ForecastReport`] as plain text for terminals and logs: a small
//! chart of each day's wave and swell heights followed by the day's peaks and
//! their ratings. Renderers return the text instead of printing it so callers
//! decide where it goes.

use crate::attributes::{DayAttributes, SeriesOptimum};
use crate::report::{CurrentReport, DayReport, ForecastReport};
use crate::scoring::{ScaleRating, WaveScore};

const ROWS: usize = 10;
const Y_AXIS_WIDTH: usize = 6;
const COLUMN_WIDTH: usize = 5;

/// Format a height for an axis label with appropriate precision
fn format_axis_height(height: f64) -> String {
    if height.fract() == 0.0 {
        format!("{:.0}", height)
    } else {
        format!("{:.1}", height)
    }
}

fn format_rating(rating: Option<&ScaleRating>) -> String {
    match rating {
        Some(r) => format!("{} ({})", r.description, r.score),
        None => "unrated".to_string(),
    }
}

fn format_score(score: &WaveScore) -> String {
    format!(
        "Douglas: {}, Face: {}",
        format_rating(score.douglas_scale.as_ref()),
        format_rating(score.face_scale.as_ref())
    )
}

fn format_optimum(name: &str, optimum: &SeriesOptimum) -> String {
    match &optimum.peak.label {
        Some(label) => format!("{:<6} {}  {}", name, label, format_score(&optimum.score)),
        None => format!("{:<6} flat", name),
    }
}

/// Draw the chart for one day: `•` wave, `~` swell, `X` the day's wave peak.
fn draw_chart(attrs: &DayAttributes) -> Vec<String> {
    let samples = &attrs.forecast;
    if samples.is_empty() {
        return Vec::new();
    }

    let max_height = samples
        .iter()
        .fold(0.0f64, |max, s| max.max(s.wave_height).max(s.swell_height));
    // Flat days still get a one-unit axis
    let top = if max_height > 0.0 { max_height } else { 1.0 };

    let height_to_row = |height: f64| {
        let normalized = (height.max(0.0) / top).min(1.0);
        ((1.0 - normalized) * (ROWS as f64 - 1.0)).round() as usize
    };

    let width = Y_AXIS_WIDTH + samples.len() * COLUMN_WIDTH;
    let mut grid = vec![vec![' '; width]; ROWS];

    // Y-axis: label the top, middle and bottom rows
    for value in [top, top / 2.0, 0.0] {
        let row = height_to_row(value);
        let label = format!("{:>width$}", format_axis_height(value), width = Y_AXIS_WIDTH - 1);
        for (i, ch) in label.chars().enumerate().take(Y_AXIS_WIDTH - 1) {
            grid[row][i] = ch;
        }
    }
    for row in grid.iter_mut() {
        row[Y_AXIS_WIDTH - 1] = '│';
    }

    let peak_time = attrs.optimal_wave.wave.peak.max_time.as_deref();
    let mut peak_marked = false;

    for (column, sample) in samples.iter().enumerate() {
        let x = Y_AXIS_WIDTH + column * COLUMN_WIDTH + COLUMN_WIDTH / 2;

        grid[height_to_row(sample.swell_height)][x] = '~';

        // Only the first matching hour is the peak
        let is_peak = !peak_marked && peak_time == Some(sample.time.as_str());
        peak_marked |= is_peak;
        grid[height_to_row(sample.wave_height)][x] = if is_peak { 'X' } else { '•' };
    }

    let mut lines: Vec<String> = grid
        .into_iter()
        .map(|row| row.into_iter().collect::<String>().trim_end().to_string())
        .collect();

    let time_row: String = samples
        .iter()
        .map(|s| format!("{:^width$}", s.time, width = COLUMN_WIDTH))
        .collect();
    lines.push(format!("{}{}", " ".repeat(Y_AXIS_WIDTH), time_row));
    lines
}

/// Render one available day.
pub fn render_day(attrs: &DayAttributes) -> String {
    let mut lines = vec![format!(
        "{} ({}), heights in {}",
        attrs.day.readable(),
        attrs.day,
        attrs.height_unit
    )];
    lines.extend(draw_chart(attrs));
    lines.push(format_optimum("Wave", &attrs.optimal_wave.wave));
    lines.push(format_optimum("Swell", &attrs.optimal_wave.swell));
    lines.join("\n")
}

fn render_current(current: &CurrentReport) -> String {
    format!(
        "Now ({}): {}{}  {}",
        current.time,
        current.wave_height,
        current.height_unit,
        format_score(&current.score)
    )
}

/// Render a whole report, one block per day.
pub fn render_report(report: &ForecastReport) -> String {
    let mut blocks = vec![format!("Swell forecast: {}", report.location)];

    if let Some(current) = &report.current {
        blocks.push(render_current(current));
    }

    for day in &report.days {
        blocks.push(match day {
            DayReport::Available(attrs) => render_day(attrs),
            DayReport::Unavailable { day } => {
                format!("{} ({}): no forecast data yet", day.readable(), day)
            }
        });
    }

    if report.days.is_empty() {
        blocks.push("No forecast data in payload".to_string());
    }

    blocks.join("\n\n")
}
