//! Data models for the HeatShelter pipeline
//!
//! This module contains the core domain models organized by concern:
//! - Shelter: Heat-relief facility records and the tabular record parser
//! - Forecast: 3-hour weather forecast samples
//! - Warning: Government weather-alert records and their display form

pub mod forecast;
pub mod shelter;
pub mod warning;

// Re-export all public types for convenient access
pub use forecast::ForecastSample;
pub use shelter::{Coordinates, Shelter, facility_type_label, parse_shelter_table};
pub use warning::{DisplayWarning, WarningRecord};
