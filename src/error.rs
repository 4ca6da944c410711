//! Error types and handling for the `HeatShelter` pipeline

use thiserror::Error;

/// Main error type for the `HeatShelter` pipeline
#[derive(Error, Debug)]
pub enum ShelterError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Feed or record parsing errors
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl ShelterError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            ShelterError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            ShelterError::Parse { .. } => {
                "Received data could not be read. Please try again later.".to_string()
            }
            ShelterError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            ShelterError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}
