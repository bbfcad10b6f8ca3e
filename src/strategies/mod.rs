//! Passive Design Strategy Catalog
//!
//! One static catalog per standard, each mapping a climate zone name to
//! exactly three design strategies.
//!
//! ## Matching
//! 1. Exact match on the trimmed zone name.
//! 2. Otherwise case-insensitive containment in either direction
//!    (key contains query, or query contains key). The first key in table
//!    order wins, so reordering a table changes which entry a loose name hits.

mod ashrae;
mod ecbc;

use serde::Serialize;

use crate::data::ClimateRecord;
use crate::error::ClimateError;
use crate::standard::ClimateStandard;

/// One recommended passive design technique
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrategyEntry {
    pub name: &'static str,
    /// Image path relative to the images root
    pub image_ref: &'static str,
    pub description: &'static str,
}

/// Catalog row: a zone name and its strategies
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub key: &'static str,
    /// Heading shown above the strategy cards
    pub title: &'static str,
    pub accent_color: &'static str,
    pub strategies: [StrategyEntry; 3],
}

/// Strategy lookup for one standard
#[derive(Debug, Clone, Copy)]
pub struct StrategyCatalog {
    standard: ClimateStandard,
    entries: &'static [CatalogEntry],
}

impl StrategyCatalog {
    pub fn for_standard(standard: ClimateStandard) -> Self {
        let entries = match standard {
            ClimateStandard::Ashrae => ashrae::ASHRAE_CATALOG,
            ClimateStandard::Ecbc => ecbc::ECBC_CATALOG,
        };
        Self { standard, entries }
    }

    pub fn standard(&self) -> ClimateStandard {
        self.standard
    }

    pub fn entries(&self) -> &'static [CatalogEntry] {
        self.entries
    }

    /// Find the catalog entry for a zone name (see module docs for rules).
    ///
    /// A blank name never matches.
    pub fn lookup(&self, zone_name: &str) -> Option<&'static CatalogEntry> {
        let query = zone_name.trim();
        if query.is_empty() {
            return None;
        }

        let entries = self.entries;
        if let Some(entry) = entries.iter().find(|e| e.key == query) {
            return Some(entry);
        }

        let query = query.to_lowercase();
        entries.iter().find(|e| {
            let key = e.key.trim().to_lowercase();
            key.contains(&query) || query.contains(&key)
        })
    }

    /// The three strategies for a zone name
    pub fn strategies_for(&self, zone_name: &str) -> Option<&'static [StrategyEntry]> {
        self.lookup(zone_name).map(|e| &e.strategies[..])
    }

    /// Like [`lookup`](Self::lookup) but reports a miss as an error value
    pub fn require(&self, zone_name: &str) -> Result<&'static CatalogEntry, ClimateError> {
        self.lookup(zone_name).ok_or_else(|| ClimateError::UnknownZoneStrategy {
            zone: zone_name.trim().to_string(),
        })
    }

    /// Catalog entry for a resolved record.
    ///
    /// A miss is logged and treated as "no design guidance".
    pub fn entry_for_record(&self, record: &ClimateRecord) -> Option<&'static CatalogEntry> {
        let label = strategy_label(self.standard, record)?;
        match self.require(label) {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!("{}", err);
                None
            }
        }
    }

    pub fn strategies_for_record(&self, record: &ClimateRecord) -> Option<&'static [StrategyEntry]> {
        self.entry_for_record(record).map(|e| &e.strategies[..])
    }
}

/// Record field the catalog is keyed on: the zone itself for ECBC, the zone
/// name for ASHRAE (whose zones are numeric codes).
pub fn strategy_label(standard: ClimateStandard, record: &ClimateRecord) -> Option<&str> {
    let label = match standard {
        ClimateStandard::Ecbc => Some(record.climate_zone.as_str()),
        ClimateStandard::Ashrae => record.climate_zone_name.as_deref(),
    };
    label.filter(|l| !l.trim().is_empty())
}
