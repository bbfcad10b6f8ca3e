//! Climate Zone Finder
//!
//! Ties one loaded dataset to its zone colors and strategy catalog. This is
//! the entry point the binary (or any frontend) drives: pick a region and
//! location, get back a report and a map payload.

use std::path::Path;
use std::sync::Arc;

use crate::data::{ClimateRecord, Dataset};
use crate::error::Result;
use crate::map::MapPayload;
use crate::report::{self, Report};
use crate::resolver::Resolution;
use crate::standard::ClimateStandard;
use crate::strategies::StrategyCatalog;
use crate::zone_colors::ZoneColorMap;

pub struct ClimateZoneFinder {
    dataset: Arc<Dataset>,
    colors: ZoneColorMap,
    catalog: StrategyCatalog,
}

impl ClimateZoneFinder {
    /// Load (or reuse the cached) dataset at `path`
    pub fn open(path: impl AsRef<Path>, standard: ClimateStandard) -> Result<Self> {
        Ok(Self::new(Dataset::load(path, standard)?))
    }

    pub fn new(dataset: Arc<Dataset>) -> Self {
        let colors = ZoneColorMap::for_dataset(&dataset);
        let catalog = StrategyCatalog::for_standard(dataset.standard());
        Self {
            dataset,
            colors,
            catalog,
        }
    }

    pub fn standard(&self) -> ClimateStandard {
        self.dataset.standard()
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn colors(&self) -> &ZoneColorMap {
        &self.colors
    }

    pub fn catalog(&self) -> &StrategyCatalog {
        &self.catalog
    }

    pub fn regions(&self) -> Vec<&str> {
        self.dataset.regions().into_iter().collect()
    }

    pub fn locations_for(&self, region: &str) -> Vec<&str> {
        self.dataset.locations_for(region).into_iter().collect()
    }

    /// Initial (region, location) selection: the default region and its
    /// first location in sorted order
    pub fn default_selection(&self) -> Option<(&str, &str)> {
        let region = self.dataset.default_region()?;
        let location = self.dataset.locations_for(region).into_iter().next()?;
        Some((region, location))
    }

    pub fn lookup(&self, region: &str, location: &str) -> Resolution<'_> {
        Resolution::lookup(&self.dataset, region, location)
    }

    /// Report for a resolved record
    pub fn report_for(&self, record: &ClimateRecord) -> Report {
        if !record.has_coordinates() {
            tracing::warn!("No coordinates for {}", record.location);
        }
        report::assemble_with_entry(
            self.standard(),
            record,
            self.catalog.entry_for_record(record),
            self.colors.color_for(&record.climate_zone),
        )
    }

    /// Report for a (region, location) pair; `None` when the pair is unknown
    pub fn report(&self, region: &str, location: &str) -> Option<Report> {
        self.lookup(region, location)
            .record()
            .map(|record| self.report_for(record))
    }

    pub fn map_payload(&self, selected: Option<&ClimateRecord>) -> MapPayload {
        MapPayload::build(&self.dataset, &self.colors, selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
State,Location,Climate Zone,Latitude,Longitude,EPW File
Delhi,New Delhi,Composite,28.6139,77.2090,https://example.org/new_delhi.epw
Kerala,Kochi,Warm-Humid,9.9312,76.2673,0
Ladakh,Leh,Cold,,,
";

    fn finder() -> ClimateZoneFinder {
        let dataset = Dataset::from_csv_bytes(CSV, ClimateStandard::Ecbc).unwrap();
        ClimateZoneFinder::new(Arc::new(dataset))
    }

    #[test]
    fn test_default_selection_prefers_delhi() {
        let finder = finder();
        assert_eq!(finder.default_selection(), Some(("Delhi", "New Delhi")));
        assert_eq!(finder.regions(), vec!["Delhi", "Kerala", "Ladakh"]);
    }

    #[test]
    fn test_report_for_known_location() {
        let report = finder().report("Kerala", "Kochi").unwrap();
        assert_eq!(report.climate_zone, "Warm-Humid");
        assert_eq!(report.zone_color, "#e59704");
        assert!(report.strategies[0].name.starts_with("Siting"));
        assert_eq!(report.strategy_accent, Some("#e59704"));
        assert_eq!(report.epw_status(), "Not Available");
    }

    #[test]
    fn test_report_for_unknown_location() {
        let finder = finder();
        assert!(finder.report("Kerala", "New Delhi").is_none());
        assert_eq!(finder.lookup("Kerala", "New Delhi").zone_display(), "-");
    }

    #[test]
    fn test_report_without_coordinates() {
        let finder = finder();
        let report = finder.report("Ladakh", "Leh").unwrap();
        assert!(report.coordinates.is_none());
        assert_eq!(report.strategies.len(), 3);

        let record = finder.lookup("Ladakh", "Leh").record().unwrap();
        let payload = finder.map_payload(Some(record));
        assert!(payload.highlight.is_none());
        assert_eq!(payload.points.len(), 2);
    }
}
