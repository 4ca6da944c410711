//! Configuration for the `HeatShelter` pipeline
//!
//! The radius, forecast window sizes and pipeline timezone were hard-coded
//! in earlier revisions of the app; here they are configuration inputs with
//! the observed values as defaults.

use crate::{Result, ShelterError};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure for the `HeatShelter` pipeline
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PipelineConfig {
    /// Shelter proximity search configuration
    #[serde(default)]
    pub proximity: ProximityConfig,
    /// Forecast bucketing configuration
    #[serde(default)]
    pub forecast: ForecastConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Proximity search settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProximityConfig {
    /// Search radius in meters
    #[serde(default = "default_radius_meters")]
    pub radius_meters: f64,
}

/// Forecast bucketing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Maximum number of upcoming 3-hour entries
    #[serde(default = "default_hourly_window")]
    pub hourly_window: usize,
    /// Maximum number of daily entries
    #[serde(default = "default_daily_limit")]
    pub daily_limit: usize,
    /// IANA timezone used to derive local hours and calendar days
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_radius_meters() -> f64 {
    600.0
}

fn default_hourly_window() -> usize {
    6
}

fn default_daily_limit() -> usize {
    7
}

fn default_timezone() -> String {
    "Asia/Seoul".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ProximityConfig {
    fn default() -> Self {
        Self {
            radius_meters: default_radius_meters(),
        }
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            hourly_window: default_hourly_window(),
            daily_limit: default_daily_limit(),
            timezone: default_timezone(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl PipelineConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config: PipelineConfig = serde_json::from_str(&contents)
            .map_err(|e| ShelterError::config(format!("invalid config file: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        if self.proximity.radius_meters <= 0.0 {
            return Err(ShelterError::config(format!(
                "radius_meters must be positive, got {}",
                self.proximity.radius_meters
            )));
        }
        if self.forecast.hourly_window == 0 {
            return Err(ShelterError::config("hourly_window must be at least 1"));
        }
        if self.forecast.daily_limit == 0 {
            return Err(ShelterError::config("daily_limit must be at least 1"));
        }
        self.forecast.parsed_timezone()?;
        Ok(())
    }
}

impl ForecastConfig {
    /// Parse the configured timezone name
    pub fn parsed_timezone(&self) -> Result<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| ShelterError::config(format!("unknown timezone: {}", self.timezone)))
    }
}
