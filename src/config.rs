//! Runtime configuration from environment variables
//!
//! | Variable           | Default                                |
//! |--------------------|----------------------------------------|
//! | `CLIMATE_STANDARD` | `ASHRAE`                               |
//! | `ASHRAE_DATASET`   | `data/ASHRAE-ClimateZoneMapping.csv`   |
//! | `ECBC_DATASET`     | `data/INDIA-WeatherMapping.csv`        |
//! | `IMAGES_DIR`       | `.`                                    |
//! | `OUTPUT_DIR`       | `reports`                              |
//! | `REGION`           | standard default / first region        |
//! | `LOCATION`         | first location of the region           |

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::standard::ClimateStandard;

pub const DEFAULT_ASHRAE_DATASET: &str = "data/ASHRAE-ClimateZoneMapping.csv";
pub const DEFAULT_ECBC_DATASET: &str = "data/INDIA-WeatherMapping.csv";
pub const DEFAULT_IMAGES_DIR: &str = ".";
pub const DEFAULT_OUTPUT_DIR: &str = "reports";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub standard: ClimateStandard,
    pub ashrae_dataset: PathBuf,
    pub ecbc_dataset: PathBuf,
    pub images_dir: PathBuf,
    pub output_dir: PathBuf,
    pub region: Option<String>,
    pub location: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let standard = match var("CLIMATE_STANDARD") {
            Some(raw) => raw.parse()?,
            None => ClimateStandard::Ashrae,
        };

        let path = |key: &str, default: &str| PathBuf::from(var(key).unwrap_or_else(|| default.to_string()));

        Ok(Self {
            standard,
            ashrae_dataset: path("ASHRAE_DATASET", DEFAULT_ASHRAE_DATASET),
            ecbc_dataset: path("ECBC_DATASET", DEFAULT_ECBC_DATASET),
            images_dir: path("IMAGES_DIR", DEFAULT_IMAGES_DIR),
            output_dir: path("OUTPUT_DIR", DEFAULT_OUTPUT_DIR),
            region: var("REGION").map(|v| v.trim().to_string()),
            location: var("LOCATION").map(|v| v.trim().to_string()),
        })
    }

    /// Dataset file for the configured standard
    pub fn dataset_path(&self) -> &Path {
        match self.standard {
            ClimateStandard::Ashrae => &self.ashrae_dataset,
            ClimateStandard::Ecbc => &self.ecbc_dataset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClimateError;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.standard, ClimateStandard::Ashrae);
        assert_eq!(config.dataset_path(), Path::new(DEFAULT_ASHRAE_DATASET));
        assert_eq!(config.output_dir, PathBuf::from("reports"));
        assert!(config.region.is_none());
    }

    #[test]
    fn test_ecbc_selection() {
        let config = config(&[
            ("CLIMATE_STANDARD", "ecbc"),
            ("ECBC_DATASET", "/srv/india.csv"),
            ("REGION", " Delhi "),
            ("LOCATION", ""),
        ])
        .unwrap();
        assert_eq!(config.standard, ClimateStandard::Ecbc);
        assert_eq!(config.dataset_path(), Path::new("/srv/india.csv"));
        assert_eq!(config.region.as_deref(), Some("Delhi"));
        assert!(config.location.is_none());
    }

    #[test]
    fn test_invalid_standard() {
        let err = config(&[("CLIMATE_STANDARD", "koppen")]).unwrap_err();
        assert!(matches!(err, ClimateError::Config(_)));
        assert!(err.is_fatal());
    }
}
