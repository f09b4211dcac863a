//! # Configuration Management
//!
//! This module handles loading and parsing configuration from the swell-config.toml
//! file. It names the forecast location and controls how many days are published
//! and in which unit heights are reported.

use crate::HeightUnit;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "swell-config.toml";

/// Application configuration loaded from swell-config.toml
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Forecast location
    pub location: LocationConfig,
    /// Report shape
    #[serde(default)]
    pub report: ReportConfig,
}

/// Forecast location
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocationConfig {
    /// Human-readable location name (e.g., "Kirra Qld Australia")
    pub name: String,
    /// Latitude the payload was requested for, kept for reference
    pub latitude: f64,
    /// Longitude the payload was requested for, kept for reference
    pub longitude: f64,
}

/// Report configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Days to publish, starting with the current day (1-7)
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u32,
    /// Report heights in this unit instead of the payload's own
    #[serde(default)]
    pub display_unit: Option<HeightUnit>,
}

fn default_forecast_days() -> u32 {
    5
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            forecast_days: default_forecast_days(),
            display_unit: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            location: LocationConfig {
                name: "Kirra Qld Australia".to_string(),
                latitude: -28.167,
                longitude: 153.526,
            },
            report: ReportConfig::default(),
        }
    }
}

impl LocationConfig {
    /// Identifier form of the location name: lowercase, spaces become
    /// underscores, anything outside `[a-z0-9_]` is dropped.
    ///
    /// ```
    /// use swell_forecast_lib::config::Config;
    ///
    /// assert_eq!(Config::default().location.slug(), "kirra_qld_australia");
    /// ```
    pub fn slug(&self) -> String {
        self.name
            .to_lowercase()
            .replace(' ', "_")
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_')
            .collect()
    }
}

impl Config {
    /// Load configuration from swell-config.toml
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load() -> Self {
        Self::load_from_path(CONFIG_FILE)
    }

    /// Load configuration from specified path
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => {
                    info!("Loaded configuration for location: {}", config.location.name);
                    config
                }
                Err(e) => {
                    warn!("Invalid config file format: {}", e);
                    warn!("Using default configuration (Kirra Qld Australia)");
                    Self::default()
                }
            },
            Err(_) => {
                info!("No config file found, using default configuration (Kirra Qld Australia)");
                Self::default()
            }
        }
    }

    /// Save current configuration to the given path
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(&path, contents)?;
        info!("Configuration saved to {}", path.as_ref().display());
        Ok(())
    }
}
