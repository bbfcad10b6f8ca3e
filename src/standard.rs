//! Climate classification standards
//!
//! Each standard corresponds to one dataset variant and decides which column
//! holds the region key, how zone colors are assigned and which strategy
//! table applies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ClimateError;

/// Dataset variant / classification standard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ClimateStandard {
    /// ASHRAE Standard 169, world stations keyed by country.
    /// Zones are short codes ("3B") with a separate zone name column.
    Ashrae,

    /// Energy Conservation Building Code of India, keyed by state.
    /// Zones are the five named ECBC categories.
    Ecbc,
}

impl ClimateStandard {
    /// Column holding the region half of the lookup key
    pub fn region_column(&self) -> &'static str {
        match self {
            ClimateStandard::Ashrae => "Country",
            ClimateStandard::Ecbc => "State",
        }
    }

    /// Label for the region row of the report table
    pub fn region_label(&self) -> &'static str {
        self.region_column()
    }

    /// Whether the `Climate Zone Name` column must be present
    pub fn requires_zone_name(&self) -> bool {
        matches!(self, ClimateStandard::Ashrae)
    }

    /// Full standard name printed on reports
    pub fn display_name(&self) -> &'static str {
        match self {
            ClimateStandard::Ashrae => "ASHRAE Standard 169",
            ClimateStandard::Ecbc => "Energy Conservation Building Code (ECBC) 2017",
        }
    }

    /// Fixed country for single-country datasets
    pub fn fixed_country(&self) -> Option<&'static str> {
        match self {
            ClimateStandard::Ashrae => None,
            ClimateStandard::Ecbc => Some("India"),
        }
    }

    /// Region preselected when the user has not chosen one
    pub fn default_region(&self) -> Option<&'static str> {
        match self {
            ClimateStandard::Ashrae => None,
            ClimateStandard::Ecbc => Some("Delhi"),
        }
    }

    pub fn all() -> &'static [ClimateStandard] {
        &[ClimateStandard::Ashrae, ClimateStandard::Ecbc]
    }
}

impl fmt::Display for ClimateStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClimateStandard::Ashrae => write!(f, "ASHRAE"),
            ClimateStandard::Ecbc => write!(f, "ECBC"),
        }
    }
}

impl FromStr for ClimateStandard {
    type Err = ClimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ASHRAE" => Ok(ClimateStandard::Ashrae),
            "ECBC" => Ok(ClimateStandard::Ecbc),
            other => Err(ClimateError::Config(format!(
                "unknown climate standard '{}' (expected ASHRAE or ECBC)",
                other
            ))),
        }
    }
}
