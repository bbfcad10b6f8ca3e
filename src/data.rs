//! Dataset Loading and Management
//!
//! Loads the climate zone mapping tables (CSV exports of the ASHRAE and ECBC
//! spreadsheets) using Polars and keeps them in memory for the lifetime of the
//! process. Every column is read as text and trimmed; coordinates are parsed
//! afterwards so that a stray value in one row cannot change the column type.

use polars::prelude::*;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::collections::BTreeSet;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use crate::error::{ClimateError, Result};
use crate::standard::ClimateStandard;

pub const LOCATION_COLUMN: &str = "Location";
pub const ZONE_COLUMN: &str = "Climate Zone";
pub const ZONE_NAME_COLUMN: &str = "Climate Zone Name";
pub const LATITUDE_COLUMN: &str = "Latitude";
pub const LONGITUDE_COLUMN: &str = "Longitude";
pub const EPW_COLUMN: &str = "EPW File";

/// One dataset row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClimateRecord {
    /// Country (ASHRAE) or state (ECBC)
    pub region: String,
    pub location: String,
    pub climate_zone: String,
    pub climate_zone_name: Option<String>,
    /// NaN when missing or unparseable
    pub latitude: f64,
    /// NaN when missing or unparseable
    pub longitude: f64,
    /// EPW weather file URL; `None` for the "" and "0" sentinels
    pub epw_reference: Option<String>,
}

impl ClimateRecord {
    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.has_coordinates().then_some((self.latitude, self.longitude))
    }
}

/// In-memory climate zone table
///
/// Rows keep the order they were loaded in; resolution relies on it.
#[derive(Debug)]
pub struct Dataset {
    standard: ClimateStandard,
    source: Option<PathBuf>,
    records: Vec<ClimateRecord>,
}

type CacheKey = (PathBuf, ClimateStandard);

static DATASET_CACHE: OnceLock<RwLock<FxHashMap<CacheKey, Arc<Dataset>>>> = OnceLock::new();

fn cache() -> &'static RwLock<FxHashMap<CacheKey, Arc<Dataset>>> {
    DATASET_CACHE.get_or_init(|| RwLock::new(FxHashMap::default()))
}

impl Dataset {
    /// Load a dataset from a CSV file, reusing the cached copy when this path
    /// has been loaded before.
    ///
    /// The cache is never invalidated; a changed file is only picked up after
    /// a restart.
    pub fn load(path: impl AsRef<Path>, standard: ClimateStandard) -> Result<Arc<Dataset>> {
        let key = (path.as_ref().to_path_buf(), standard);

        if let Some(dataset) = cache()
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            tracing::debug!("Dataset cache hit: {}", key.0.display());
            return Ok(Arc::clone(dataset));
        }

        let mut guard = cache().write().unwrap_or_else(PoisonError::into_inner);

        // Another caller may have loaded it between the two locks
        if let Some(dataset) = guard.get(&key) {
            return Ok(Arc::clone(dataset));
        }

        let dataset = Arc::new(Self::read_file(&key.0, standard)?);
        guard.insert(key, Arc::clone(&dataset));
        Ok(dataset)
    }

    /// Read a dataset from a file without touching the cache
    pub fn read_file(path: &Path, standard: ClimateStandard) -> Result<Dataset> {
        if !path.exists() {
            return Err(ClimateError::DataLoad {
                path: path.to_path_buf(),
                reason: "file not found".to_string(),
            });
        }

        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .try_into_reader_with_file_path(Some(path.to_path_buf()))
            .map_err(|e| load_error(path, e))?
            .finish()
            .map_err(|e| load_error(path, e))?;

        let dataset = Self::from_frame(&df, standard, Some(path))?;
        tracing::info!(
            "Loaded {} {} records from {} ({} regions)",
            dataset.len(),
            standard,
            path.display(),
            dataset.regions().len()
        );
        Ok(dataset)
    }

    /// Parse CSV bytes held in memory (uncached)
    pub fn from_csv_bytes(bytes: impl Into<Vec<u8>>, standard: ClimateStandard) -> Result<Dataset> {
        let label = Path::new("<memory>");
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .into_reader_with_file_handle(Cursor::new(bytes.into()))
            .finish()
            .map_err(|e| load_error(label, e))?;

        Self::from_frame(&df, standard, None)
    }

    /// Build a dataset from already-parsed records (uncached)
    ///
    /// Text fields are trimmed the same way file loads trim them.
    pub fn from_records(standard: ClimateStandard, records: Vec<ClimateRecord>) -> Dataset {
        Dataset {
            standard,
            source: None,
            records: records.into_iter().map(trim_record).collect(),
        }
    }

    fn from_frame(df: &DataFrame, standard: ClimateStandard, source: Option<&Path>) -> Result<Dataset> {
        let label = source.unwrap_or_else(|| Path::new("<memory>"));

        let regions = text_column(df, standard.region_column(), label)?;
        let locations = text_column(df, LOCATION_COLUMN, label)?;
        let zones = text_column(df, ZONE_COLUMN, label)?;
        let latitudes = text_column(df, LATITUDE_COLUMN, label)?;
        let longitudes = text_column(df, LONGITUDE_COLUMN, label)?;

        let zone_names = if standard.requires_zone_name() {
            text_column(df, ZONE_NAME_COLUMN, label)?
        } else {
            optional_text_column(df, ZONE_NAME_COLUMN, label)?
        };
        let epw_files = optional_text_column(df, EPW_COLUMN, label)?;

        let mut records = Vec::with_capacity(df.height());
        let mut skipped = 0usize;

        for idx in 0..df.height() {
            // Rows without both key halves can never be selected
            let (Some(region), Some(location)) = (&regions[idx], &locations[idx]) else {
                skipped += 1;
                continue;
            };

            records.push(ClimateRecord {
                region: region.clone(),
                location: location.clone(),
                climate_zone: zones[idx].clone().unwrap_or_default(),
                climate_zone_name: zone_names[idx].clone().filter(|s| !s.is_empty()),
                latitude: parse_coordinate(latitudes[idx].as_deref()),
                longitude: parse_coordinate(longitudes[idx].as_deref()),
                epw_reference: normalize_epw(epw_files[idx].as_deref()),
            });
        }

        if skipped > 0 {
            tracing::warn!("Skipped {} rows without region or location in {}", skipped, label.display());
        }

        Ok(Dataset {
            standard,
            source: source.map(Path::to_path_buf),
            records,
        })
    }

    pub fn standard(&self) -> ClimateStandard {
        self.standard
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn records(&self) -> &[ClimateRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct regions in sorted order
    pub fn regions(&self) -> BTreeSet<&str> {
        self.records.iter().map(|r| r.region.as_str()).collect()
    }

    /// Distinct locations for a region (exact, case-sensitive match)
    pub fn locations_for(&self, region: &str) -> BTreeSet<&str> {
        self.records
            .iter()
            .filter(|r| r.region == region)
            .map(|r| r.location.as_str())
            .collect()
    }

    /// Sorted distinct non-empty climate zones
    pub fn zones(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.climate_zone.trim())
            .filter(|z| !z.is_empty())
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Zone name of the first row carrying this zone
    pub fn zone_name_for(&self, zone: &str) -> Option<&str> {
        let zone = zone.trim();
        self.records
            .iter()
            .filter(|r| r.climate_zone == zone)
            .find_map(|r| r.climate_zone_name.as_deref().filter(|n| !n.is_empty()))
    }

    /// Rows with usable latitude and longitude
    pub fn mappable_records(&self) -> impl Iterator<Item = &ClimateRecord> {
        self.records.iter().filter(|r| r.has_coordinates())
    }

    /// Region to preselect: the standard's default when present, else the
    /// first region in sorted order
    pub fn default_region(&self) -> Option<&str> {
        let regions = self.regions();
        self.standard
            .default_region()
            .and_then(|preferred| regions.get(preferred).copied())
            .or_else(|| regions.first().copied())
    }
}

fn load_error(path: &Path, err: PolarsError) -> ClimateError {
    ClimateError::DataLoad {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}

/// Read a required column as trimmed text
fn text_column(df: &DataFrame, name: &str, path: &Path) -> Result<Vec<Option<String>>> {
    let column = df.column(name).map_err(|_| ClimateError::MissingColumn {
        path: path.to_path_buf(),
        column: name.to_string(),
    })?;

    let column = column
        .cast(&DataType::String)
        .map_err(|e| load_error(path, e))?;
    let values = column.str().map_err(|e| load_error(path, e))?;

    Ok(values
        .into_iter()
        .map(|v| v.map(|s| s.trim().to_string()))
        .collect())
}

/// Read an optional column; absent columns yield all-`None`
fn optional_text_column(df: &DataFrame, name: &str, path: &Path) -> Result<Vec<Option<String>>> {
    if df.get_column_names().iter().any(|c| c.as_str() == name) {
        text_column(df, name, path)
    } else {
        Ok(vec![None; df.height()])
    }
}

fn trim_record(record: ClimateRecord) -> ClimateRecord {
    let trim = |value: String| value.trim().to_string();
    ClimateRecord {
        region: trim(record.region),
        location: trim(record.location),
        climate_zone: trim(record.climate_zone),
        climate_zone_name: record
            .climate_zone_name
            .map(trim)
            .filter(|name| !name.is_empty()),
        epw_reference: normalize_epw(record.epw_reference.as_deref()),
        ..record
    }
}

fn parse_coordinate(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Empty strings and the literal "0" mean no EPW file is published
pub fn normalize_epw(raw: Option<&str>) -> Option<String> {
    let value = raw?.trim();
    if value.is_empty() || value == "0" {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ECBC_CSV: &str = "\
State,Location,Climate Zone,Latitude,Longitude,EPW File
Delhi,New Delhi,Composite,28.61,77.21,https://example.org/delhi.epw
Rajasthan,Jaisalmer, Hot-Dry ,26.91,70.92,0
Ladakh,Leh,Cold,,,
Delhi,Palam,Composite,28.57,77.11,
";

    #[test]
    fn test_parse_ecbc_rows() {
        let data = Dataset::from_csv_bytes(ECBC_CSV, ClimateStandard::Ecbc).unwrap();
        assert_eq!(data.len(), 4);

        let first = &data.records()[0];
        assert_eq!(first.region, "Delhi");
        assert_eq!(first.location, "New Delhi");
        assert_eq!(first.climate_zone, "Composite");
        assert_eq!(first.climate_zone_name, None);
        assert_eq!(first.epw_reference.as_deref(), Some("https://example.org/delhi.epw"));
        approx::assert_relative_eq!(first.latitude, 28.61);

        // Zone trimmed, "0" sentinel dropped
        let jaisalmer = &data.records()[1];
        assert_eq!(jaisalmer.climate_zone, "Hot-Dry");
        assert_eq!(jaisalmer.epw_reference, None);

        let leh = &data.records()[2];
        assert!(leh.latitude.is_nan());
        assert!(!leh.has_coordinates());
        assert_eq!(leh.coordinates(), None);
    }

    #[test]
    fn test_regions_sorted_unique() {
        let data = Dataset::from_csv_bytes(ECBC_CSV, ClimateStandard::Ecbc).unwrap();
        let regions: Vec<&str> = data.regions().into_iter().collect();
        assert_eq!(regions, vec!["Delhi", "Ladakh", "Rajasthan"]);
    }

    #[test]
    fn test_locations_exact_match() {
        let data = Dataset::from_csv_bytes(ECBC_CSV, ClimateStandard::Ecbc).unwrap();
        let delhi: Vec<&str> = data.locations_for("Delhi").into_iter().collect();
        assert_eq!(delhi, vec!["New Delhi", "Palam"]);
        assert!(data.locations_for("delhi").is_empty());
    }

    #[test]
    fn test_mappable_excludes_missing_coordinates() {
        let data = Dataset::from_csv_bytes(ECBC_CSV, ClimateStandard::Ecbc).unwrap();
        let mappable: Vec<&str> = data.mappable_records().map(|r| r.location.as_str()).collect();
        assert_eq!(mappable, vec!["New Delhi", "Jaisalmer", "Palam"]);
    }

    #[test]
    fn test_missing_required_column() {
        let csv = "State,Location,Latitude,Longitude\nDelhi,New Delhi,28.6,77.2\n";
        let err = Dataset::from_csv_bytes(csv, ClimateStandard::Ecbc).unwrap_err();
        match err {
            ClimateError::MissingColumn { column, .. } => assert_eq!(column, "Climate Zone"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_ashrae_requires_zone_name() {
        let csv = "Country,Location,Climate Zone,Latitude,Longitude\nUSA,Denver,5B,39.7,-104.9\n";
        assert!(Dataset::from_csv_bytes(csv, ClimateStandard::Ashrae).is_err());
    }

    #[test]
    fn test_missing_file_is_data_load_error() {
        let err = Dataset::load("/nonexistent/climate.csv", ClimateStandard::Ashrae).unwrap_err();
        assert!(matches!(err, ClimateError::DataLoad { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_default_region() {
        let data = Dataset::from_csv_bytes(ECBC_CSV, ClimateStandard::Ecbc).unwrap();
        assert_eq!(data.default_region(), Some("Delhi"));

        let csv = "State,Location,Climate Zone,Latitude,Longitude\nKerala,Kochi,Warm-Humid,9.9,76.2\n";
        let data = Dataset::from_csv_bytes(csv, ClimateStandard::Ecbc).unwrap();
        assert_eq!(data.default_region(), Some("Kerala"));
    }

    #[test]
    fn test_from_records_trims_like_file_loads() {
        let data = Dataset::from_records(
            ClimateStandard::Ashrae,
            vec![ClimateRecord {
                region: " United States".to_string(),
                location: "Denver ".to_string(),
                climate_zone: " 2B ".to_string(),
                climate_zone_name: Some(" Hot Dry ".to_string()),
                latitude: 39.7,
                longitude: -104.9,
                epw_reference: Some("0".to_string()),
            }],
        );

        let record = &data.records()[0];
        assert_eq!(record.region, "United States");
        assert_eq!(record.location, "Denver");
        assert_eq!(record.epw_reference, None);
        assert_eq!(data.zones(), vec!["2B".to_string()]);
        assert_eq!(data.zone_name_for("2B"), Some("Hot Dry"));
        assert_eq!(data.zone_name_for(" 2B "), Some("Hot Dry"));
    }

    #[test]
    fn test_normalize_epw() {
        assert_eq!(normalize_epw(None), None);
        assert_eq!(normalize_epw(Some("  ")), None);
        assert_eq!(normalize_epw(Some("0")), None);
        assert_eq!(normalize_epw(Some(" http://x/y.epw ")).as_deref(), Some("http://x/y.epw"));
    }
}
