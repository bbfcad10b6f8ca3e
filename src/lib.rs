//! Climate Zone Finder
//!
//! Looks up the climate zone of a location in the ASHRAE 169 or ECBC 2017
//! mapping tables and produces a report with passive design strategies.
//!
//! - `data`: dataset loading with Polars and the process-wide cache
//! - `resolver`: (region, location) lookup
//! - `zone_colors`: zone to color assignment for maps and report cards
//! - `strategies/`: per-standard design strategy catalogs
//! - `report/`: report assembly, PDF export, markdown/JSON formatters
//! - `map`: serializable map payload
//! - `finder`: facade tying a dataset to its colors and catalog

pub mod config;
pub mod data;
pub mod error;
pub mod finder;
pub mod map;
pub mod report;
pub mod resolver;
pub mod standard;
pub mod strategies;
pub mod zone_colors;

// Re-export commonly used types
pub use config::Config;
pub use data::{ClimateRecord, Dataset};
pub use error::{ClimateError, Result};
pub use finder::ClimateZoneFinder;
pub use map::{LegendEntry, MapPayload, MapPoint};
pub use report::{assemble, assemble_with_entry, export_document, ExportedDocument, Report};
pub use resolver::{resolve, Resolution};
pub use standard::ClimateStandard;
pub use strategies::{StrategyCatalog, StrategyEntry};
pub use zone_colors::{ColorPolicy, ZoneColorMap};
