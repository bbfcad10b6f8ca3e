//! Error types for climate zone lookup and report export.
//!
//! Only dataset loading, configuration and the PDF backend produce hard
//! errors. The per-record variants (`NotFound`, `MissingCoordinates`,
//! `ImageEmbed`, `UnknownZoneStrategy`) exist so callers can log or collect
//! them while still rendering partial output.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClimateError {
    /// Dataset file missing or unparseable.
    #[error("failed to load dataset {path}: {reason}")]
    DataLoad { path: PathBuf, reason: String },

    /// Dataset parsed but a required column is absent.
    #[error("dataset {path} is missing required column '{column}'")]
    MissingColumn { path: PathBuf, column: String },

    #[error("no climate record for location '{location}' in '{region}'")]
    NotFound { region: String, location: String },

    #[error("coordinates not available for {location}")]
    MissingCoordinates { location: String },

    #[error("could not embed image {path}: {reason}")]
    ImageEmbed { path: PathBuf, reason: String },

    #[error("no design strategies known for climate zone '{zone}'")]
    UnknownZoneStrategy { zone: String },

    #[error("document rendering failed: {reason}")]
    Document { reason: String },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ClimateError {
    /// Startup failures the application cannot recover from.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ClimateError::DataLoad { .. } | ClimateError::MissingColumn { .. } | ClimateError::Config(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ClimateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_classification() {
        let load = ClimateError::DataLoad {
            path: PathBuf::from("missing.csv"),
            reason: "No such file".to_string(),
        };
        assert!(load.is_fatal());

        let miss = ClimateError::NotFound {
            region: "India".to_string(),
            location: "Atlantis".to_string(),
        };
        assert!(!miss.is_fatal());

        let render = ClimateError::Document {
            reason: "font table".to_string(),
        };
        assert!(!render.is_fatal());
        assert_eq!(
            miss.to_string(),
            "no climate record for location 'Atlantis' in 'India'"
        );
    }
}
