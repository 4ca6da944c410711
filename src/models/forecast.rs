//! Weather forecast samples at 3-hour granularity

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// One time-stamped weather reading from the forecast vendor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastSample {
    /// Timestamp of this reading
    pub timestamp: DateTime<Utc>,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Vendor weather icon code
    pub condition_code: String,
}

impl ForecastSample {
    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{:.0}°C", self.temperature)
    }

    /// Weekday name of this sample in the given timezone, e.g. "Monday"
    #[must_use]
    pub fn weekday_label(&self, tz: &Tz) -> String {
        self.timestamp.with_timezone(tz).format("%A").to_string()
    }
}
