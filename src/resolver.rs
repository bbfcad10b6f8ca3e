//! Location Resolution
//!
//! Two-key exact-match lookup over a loaded dataset. Duplicate
//! (region, location) pairs are not rejected at load time; the first row in
//! load order wins.

use crate::data::{ClimateRecord, Dataset};
use crate::error::ClimateError;

/// Placeholder rendered for any fact that cannot be shown
pub const PLACEHOLDER: &str = "-";

/// Find the record for a (region, location) pair.
pub fn resolve<'a>(dataset: &'a Dataset, region: &str, location: &str) -> Option<&'a ClimateRecord> {
    dataset
        .records()
        .iter()
        .find(|r| r.region == region && r.location == location)
}

/// Outcome of a lookup, keeping "no row" distinct from "row with an empty zone"
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution<'a> {
    NotFound,
    Found(&'a ClimateRecord),
}

impl<'a> Resolution<'a> {
    pub fn lookup(dataset: &'a Dataset, region: &str, location: &str) -> Self {
        match resolve(dataset, region, location) {
            Some(record) => Resolution::Found(record),
            None => {
                tracing::debug!("No record for {} / {}", region, location);
                Resolution::NotFound
            }
        }
    }

    pub fn record(&self) -> Option<&'a ClimateRecord> {
        match *self {
            Resolution::Found(record) => Some(record),
            Resolution::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }

    /// Zone for display; "-" when unresolved or blank
    pub fn zone_display(&self) -> &'a str {
        match *self {
            Resolution::Found(r) if !r.climate_zone.is_empty() => r.climate_zone.as_str(),
            _ => PLACEHOLDER,
        }
    }

    /// Zone name for display; "-" when unresolved or absent
    pub fn zone_name_display(&self) -> &'a str {
        self.record()
            .and_then(|r| r.climate_zone_name.as_deref())
            .unwrap_or(PLACEHOLDER)
    }

    /// Whether the map can be drawn for this selection
    pub fn has_coordinates(&self) -> bool {
        self.record().is_some_and(ClimateRecord::has_coordinates)
    }

    /// Coordinates, or the warning the UI shows instead of the map.
    ///
    /// An unresolved selection is `NotFound`. `Resolution` does not keep the
    /// query keys, so they render as the placeholder; use
    /// [`into_result`](Self::into_result) for a keyed error.
    pub fn coordinates(&self) -> Result<(f64, f64), ClimateError> {
        let record = self.record().ok_or_else(|| ClimateError::NotFound {
            region: PLACEHOLDER.to_string(),
            location: PLACEHOLDER.to_string(),
        })?;
        record.coordinates().ok_or_else(|| ClimateError::MissingCoordinates {
            location: record.location.clone(),
        })
    }

    /// Convert into a hard error for callers that cannot render placeholders
    pub fn into_result(self, region: &str, location: &str) -> Result<&'a ClimateRecord, ClimateError> {
        self.record().ok_or_else(|| ClimateError::NotFound {
            region: region.to_string(),
            location: location.to_string(),
        })
    }
}
