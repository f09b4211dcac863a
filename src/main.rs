//! # Swell Forecast Command Line
//!
//! Reads a marine forecast payload saved by the data source, builds the
//! per-day report and prints it either as text (default) or as the JSON
//! attribute set a presentation layer would publish.

#[cfg(test)]
mod tests;

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use log::{debug, error};
use std::path::PathBuf;
use swell_forecast_lib::{
    config::{Config, CONFIG_FILE},
    forecast::load_payload,
    renderer::render_report,
    report::{build_report, ReportOptions},
    HeightUnit,
};

#[derive(Parser)]
#[command(
    name = "swell-forecast",
    version,
    about = "Per-day wave and swell summaries from a marine forecast payload"
)]
struct Cli {
    /// Marine forecast payload (Open-Meteo JSON)
    payload: PathBuf,

    /// Configuration file
    #[arg(long, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Only show this forecast day (1 = today)
    #[arg(long)]
    day: Option<u32>,

    /// Override the configured number of forecast days
    #[arg(long)]
    days: Option<u32>,

    /// Report heights in this unit ("ft" or "m")
    #[arg(long)]
    unit: Option<HeightUnit>,

    /// Print the published attributes as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load_from_path(&cli.config);

    let payload = load_payload(&cli.payload)
        .with_context(|| format!("reading payload {}", cli.payload.display()))?;

    // A single requested day must lie within the built report
    let forecast_days = cli
        .days
        .unwrap_or(config.report.forecast_days)
        .max(cli.day.unwrap_or(0));
    let options = ReportOptions {
        location: config.location.slug(),
        forecast_days,
        display_unit: cli.unit.or(config.report.display_unit),
        updated_at: Local::now().fixed_offset(),
    };
    debug!("building report with {:?}", options);

    let mut report = build_report(&payload, &options).context("building forecast report")?;

    // Days are built in offset order, so day N sits at index N-1
    if let Some(day) = cli.day {
        let index = day.checked_sub(1).context("--day starts at 1")? as usize;
        report.days = report.days.into_iter().nth(index).into_iter().collect();
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_report(&report));
    }

    Ok(())
}

/// Main application entry point.
fn main() {
    env_logger::init();

    if let Err(e) = run(Cli::parse()) {
        error!("{:#}", e);
        eprintln!("swell-forecast: {:#}", e);
        std::process::exit(1);
    }
}
