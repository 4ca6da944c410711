//! `HeatShelter` - heat-wave shelter lookup and weather alert data pipeline
//!
//! This library provides the data normalization and selection core behind a
//! heat-shelter map application: proximity filtering of shelter records,
//! hourly/daily bucketing of 3-hour forecast series, and parsing/formatting
//! of government weather-warning feeds.

pub mod config;
pub mod error;
pub mod forecast;
pub mod models;
pub mod proximity;
pub mod warnings;

// Re-export core types for public API
pub use config::PipelineConfig;
pub use error::ShelterError;
pub use forecast::ForecastBucketSelector;
pub use models::{Coordinates, DisplayWarning, ForecastSample, Shelter, WarningRecord};
pub use proximity::ProximityFilter;
pub use warnings::{NO_WARNINGS_MESSAGE, format_bulletin, parse_warnings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, ShelterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
