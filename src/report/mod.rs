//! Climate Zone Report
//!
//! A report is assembled on demand from a resolved record and its design
//! strategies, then rendered to PDF (`pdf`) or to markdown/JSON
//! (`formatters`). Nothing here is persisted.

pub mod formatters;
pub mod pdf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::data::ClimateRecord;
use crate::resolver::PLACEHOLDER;
use crate::standard::ClimateStandard;
use crate::strategies::{CatalogEntry, StrategyEntry};

pub use formatters::{JsonFormatter, MarkdownFormatter};
pub use pdf::{export_document, ExportedDocument};

pub const REPORT_TITLE: &str = "CLIMATE ZONE FINDER REPORT";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Everything shown on the report card and in the exported document
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub standard: ClimateStandard,
    pub location: String,
    pub region: String,
    pub country: String,
    pub climate_zone: String,
    pub climate_zone_name: Option<String>,
    pub zone_color: String,
    pub coordinates: Option<Coordinates>,
    pub epw_reference: Option<String>,
    /// Empty when the catalog has no entry for the zone
    pub strategies: Vec<StrategyEntry>,
    /// Heading of the matched catalog entry
    pub strategy_title: Option<&'static str>,
    /// Accent color of the matched catalog entry
    pub strategy_accent: Option<&'static str>,
    pub generated_at: DateTime<Utc>,
}

/// Build a report stamped with the current time.
pub fn assemble(
    standard: ClimateStandard,
    record: &ClimateRecord,
    strategies: Option<&[StrategyEntry]>,
    zone_color: &str,
) -> Report {
    assemble_at(standard, record, strategies, zone_color, Utc::now())
}

/// Build a report with an explicit generation time.
pub fn assemble_at(
    standard: ClimateStandard,
    record: &ClimateRecord,
    strategies: Option<&[StrategyEntry]>,
    zone_color: &str,
    generated_at: DateTime<Utc>,
) -> Report {
    let country = standard
        .fixed_country()
        .map(str::to_string)
        .unwrap_or_else(|| record.region.clone());

    Report {
        standard,
        location: record.location.clone(),
        region: record.region.clone(),
        country,
        climate_zone: record.climate_zone.clone(),
        climate_zone_name: record.climate_zone_name.clone(),
        zone_color: zone_color.to_string(),
        coordinates: record.coordinates().map(|(latitude, longitude)| Coordinates {
            latitude,
            longitude,
        }),
        epw_reference: record.epw_reference.clone(),
        strategies: strategies.map(<[StrategyEntry]>::to_vec).unwrap_or_default(),
        strategy_title: None,
        strategy_accent: None,
        generated_at,
    }
}

/// Build a report from a matched catalog entry, keeping its heading and accent.
pub fn assemble_with_entry(
    standard: ClimateStandard,
    record: &ClimateRecord,
    entry: Option<&'static CatalogEntry>,
    zone_color: &str,
) -> Report {
    let mut report = assemble(standard, record, entry.map(|e| &e.strategies[..]), zone_color);
    if let Some(entry) = entry {
        report.strategy_title = Some(entry.title);
        report.strategy_accent = Some(entry.accent_color);
    }
    report
}

impl Report {
    pub fn zone_display(&self) -> &str {
        if self.climate_zone.is_empty() {
            PLACEHOLDER
        } else {
            &self.climate_zone
        }
    }

    pub fn zone_name_display(&self) -> &str {
        self.climate_zone_name.as_deref().unwrap_or(PLACEHOLDER)
    }

    pub fn latitude_display(&self) -> String {
        self.coordinates
            .map(|c| format!("{:.4}", c.latitude))
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    }

    pub fn longitude_display(&self) -> String {
        self.coordinates
            .map(|c| format!("{:.4}", c.longitude))
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    }

    pub fn epw_status(&self) -> &'static str {
        if self.epw_reference.is_some() {
            "Available"
        } else {
            "Not Available"
        }
    }

    pub fn has_strategies(&self) -> bool {
        !self.strategies.is_empty()
    }

    /// Heading for the strategy section; the zone when no entry title is known
    pub fn strategy_heading(&self) -> &str {
        match self.strategy_title {
            Some(title) => title,
            None => self.zone_display(),
        }
    }

    /// Property/value rows for the report table
    pub fn property_rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = vec![("Location", self.location.clone())];

        rows.push((self.standard.region_label(), self.region.clone()));
        if self.standard.fixed_country().is_some() {
            rows.push(("Country", self.country.clone()));
        }

        rows.push(("Latitude", self.latitude_display()));
        rows.push(("Longitude", self.longitude_display()));
        rows.push(("Climate Zone", self.zone_display().to_string()));

        if self.standard.requires_zone_name() {
            rows.push(("Climate Zone Name", self.zone_name_display().to_string()));
        }

        rows
    }

    /// Designation paragraph under the property table
    pub fn designation_text(&self) -> String {
        format!(
            "Climate Zone: {}. This location falls under the {} climate classification as per the {}. \
             Understanding the climatic characteristics of this zone is essential for designing \
             energy-efficient buildings.",
            self.zone_display(),
            self.zone_display(),
            self.standard.display_name()
        )
    }

    /// Timestamp as printed in the document footer
    pub fn generated_display(&self) -> String {
        self.generated_at.format("%B %d, %Y at %I:%M %p").to_string()
    }

    /// Download file name; unique per second for one location/zone
    pub fn file_name(&self) -> String {
        format!(
            "Climate_Zone_Report_{}_{}_{}.pdf",
            sanitize_file_component(&self.location),
            sanitize_file_component(self.zone_display()),
            self.generated_at.format("%Y%m%d_%H%M%S")
        )
    }
}

fn sanitize_file_component(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '.' { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::StrategyCatalog;
    use chrono::TimeZone;

    fn new_delhi() -> ClimateRecord {
        ClimateRecord {
            region: "Delhi".to_string(),
            location: "New Delhi".to_string(),
            climate_zone: "Composite".to_string(),
            climate_zone_name: None,
            latitude: 28.6139,
            longitude: 77.209,
            epw_reference: Some("https://example.org/IND_DL_New.Delhi.epw".to_string()),
        }
    }

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 15, 9, 26).unwrap()
    }

    #[test]
    fn test_assemble_with_strategies() {
        let catalog = StrategyCatalog::for_standard(ClimateStandard::Ecbc);
        let record = new_delhi();
        let report = assemble_at(
            ClimateStandard::Ecbc,
            &record,
            catalog.strategies_for(&record.climate_zone),
            "#dec45e",
            fixed_time(),
        );

        assert_eq!(report.country, "India");
        assert_eq!(report.strategies.len(), 3);
        assert_eq!(report.strategies[0].name, "Shading");
        assert_eq!(report.epw_status(), "Available");
        assert_eq!(report.latitude_display(), "28.6139");
    }

    #[test]
    fn test_assemble_with_entry_keeps_heading() {
        let catalog = StrategyCatalog::for_standard(ClimateStandard::Ecbc);
        let record = new_delhi();
        let report = assemble_with_entry(
            ClimateStandard::Ecbc,
            &record,
            catalog.lookup("Composite"),
            "#dec45e",
        );
        assert_eq!(report.strategy_title, Some("Composite"));
        assert_eq!(report.strategy_accent, Some("#dec45e"));
        assert_eq!(report.strategies[0].name, "Shading");

        let plain = assemble_with_entry(ClimateStandard::Ecbc, &record, None, "#dec45e");
        assert_eq!(plain.strategy_accent, None);
        assert_eq!(plain.strategy_heading(), "Composite");
    }

    #[test]
    fn test_assemble_without_strategies() {
        let mut record = new_delhi();
        record.climate_zone = "Tropical".to_string();
        let report = assemble_at(ClimateStandard::Ecbc, &record, None, "#444444", fixed_time());
        assert!(!report.has_strategies());
        assert_eq!(report.zone_display(), "Tropical");
    }

    #[test]
    fn test_missing_facts_render_placeholder() {
        let mut record = new_delhi();
        record.climate_zone.clear();
        record.latitude = f64::NAN;
        record.epw_reference = None;

        let report = assemble_at(ClimateStandard::Ecbc, &record, None, "#444444", fixed_time());
        assert_eq!(report.zone_display(), "-");
        assert_eq!(report.zone_name_display(), "-");
        assert_eq!(report.coordinates, None);
        assert_eq!(report.latitude_display(), "-");
        assert_eq!(report.epw_status(), "Not Available");
    }

    #[test]
    fn test_property_rows_ecbc() {
        let report = assemble_at(ClimateStandard::Ecbc, &new_delhi(), None, "#dec45e", fixed_time());
        let labels: Vec<&str> = report.property_rows().iter().map(|(k, _)| *k).collect();
        assert_eq!(
            labels,
            vec!["Location", "State", "Country", "Latitude", "Longitude", "Climate Zone"]
        );
    }

    #[test]
    fn test_property_rows_ashrae() {
        let mut record = new_delhi();
        record.region = "India".to_string();
        record.climate_zone = "0B".to_string();
        record.climate_zone_name = Some("Extremely Hot Dry".to_string());

        let report = assemble_at(ClimateStandard::Ashrae, &record, None, "#1f77b4", fixed_time());
        let rows = report.property_rows();
        assert_eq!(rows[1], ("Country", "India".to_string()));
        assert_eq!(rows.last().unwrap(), &("Climate Zone Name", "Extremely Hot Dry".to_string()));
        assert!(!rows.iter().skip(2).any(|(k, _)| *k == "Country"));
    }

    #[test]
    fn test_file_name_pattern() {
        let report = assemble_at(ClimateStandard::Ecbc, &new_delhi(), None, "#dec45e", fixed_time());
        assert_eq!(
            report.file_name(),
            "Climate_Zone_Report_New_Delhi_Composite_20250314_150926.pdf"
        );

        let mut record = new_delhi();
        record.location = "Port Blair/Andaman".to_string();
        let report = assemble_at(ClimateStandard::Ecbc, &record, None, "#dec45e", fixed_time());
        assert!(!report.file_name().contains('/'));
    }

    #[test]
    fn test_generated_display() {
        let report = assemble_at(ClimateStandard::Ecbc, &new_delhi(), None, "#dec45e", fixed_time());
        assert_eq!(report.generated_display(), "March 14, 2025 at 03:09 PM");
    }
}
