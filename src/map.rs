//! Map Payload
//!
//! Serializable view of a dataset for a map frontend: one colored point per
//! row with coordinates, an optional highlight for the selected location and
//! the zone legend.

use serde::Serialize;

use crate::data::{ClimateRecord, Dataset};
use crate::standard::ClimateStandard;
use crate::zone_colors::{ZoneColorMap, SELECTED_COLOR};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub latitude: f64,
    pub longitude: f64,
    /// Hover title (the location)
    pub title: String,
    pub region: String,
    pub zone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_name: Option<String>,
    pub color: String,
}

impl MapPoint {
    fn from_record(record: &ClimateRecord, color: &str) -> Option<Self> {
        let (latitude, longitude) = record.coordinates()?;
        Some(Self {
            latitude,
            longitude,
            title: record.location.clone(),
            region: record.region.clone(),
            zone: record.climate_zone.clone(),
            zone_name: record.climate_zone_name.clone(),
            color: color.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub zone: String,
    pub label: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MapPayload {
    pub standard: ClimateStandard,
    pub points: Vec<MapPoint>,
    /// Selected location drawn on top; `None` without coordinates
    pub highlight: Option<MapPoint>,
    pub legend: Vec<LegendEntry>,
}

impl MapPayload {
    pub fn build(dataset: &Dataset, colors: &ZoneColorMap, selected: Option<&ClimateRecord>) -> Self {
        let points: Vec<MapPoint> = dataset
            .mappable_records()
            .filter_map(|r| MapPoint::from_record(r, colors.color_for(&r.climate_zone)))
            .collect();

        let highlight = selected.and_then(|record| {
            let point = MapPoint::from_record(record, SELECTED_COLOR);
            if point.is_none() {
                tracing::warn!("No coordinates for {}; map highlight skipped", record.location);
            }
            point
        });

        let legend = colors
            .legend()
            .into_iter()
            .map(|(zone, color)| LegendEntry {
                zone: zone.to_string(),
                label: legend_label(dataset, zone),
                color: color.to_string(),
            })
            .collect();

        tracing::debug!(
            "Map payload: {} of {} records mappable",
            points.len(),
            dataset.len()
        );

        Self {
            standard: dataset.standard(),
            points,
            highlight,
            legend,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn legend_label(dataset: &Dataset, zone: &str) -> String {
    match dataset.zone_name_for(zone) {
        Some(name) => format!("{} - {}", zone, name),
        None => zone.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn row(region: &str, location: &str, zone: &str, name: Option<&str>, lat: f64, lon: f64) -> ClimateRecord {
        ClimateRecord {
            region: region.to_string(),
            location: location.to_string(),
            climate_zone: zone.to_string(),
            climate_zone_name: name.map(str::to_string),
            latitude: lat,
            longitude: lon,
            epw_reference: None,
        }
    }

    fn ashrae() -> Dataset {
        Dataset::from_records(
            ClimateStandard::Ashrae,
            vec![
                row("United States", "Phoenix", "2B", Some("Hot Dry"), 33.43, -112.02),
                row("United States", "Seattle", "4C", Some("Cool Marine"), 47.45, -122.31),
                row("Canada", "Nowhere", "7", Some("Very Cold"), f64::NAN, -100.0),
            ],
        )
    }

    #[test]
    fn test_points_exclude_unmappable_rows() {
        let dataset = ashrae();
        let colors = ZoneColorMap::for_dataset(&dataset);
        let payload = MapPayload::build(&dataset, &colors, None);

        let titles: Vec<&str> = payload.points.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Phoenix", "Seattle"]);
        assert_eq!(payload.points[0].color, colors.color_for("2B"));
        assert!(payload.highlight.is_none());
    }

    #[test]
    fn test_legend_covers_unmappable_zones() {
        let dataset = ashrae();
        let colors = ZoneColorMap::for_dataset(&dataset);
        let payload = MapPayload::build(&dataset, &colors, None);

        let zones: Vec<&str> = payload.legend.iter().map(|l| l.zone.as_str()).collect();
        assert_eq!(zones, vec!["2B", "4C", "7"]);
        assert_eq!(payload.legend[0].label, "2B - Hot Dry");
    }

    #[test]
    fn test_highlight_selected() {
        let dataset = ashrae();
        let colors = ZoneColorMap::for_dataset(&dataset);
        let selected = &dataset.records()[1];
        let payload = MapPayload::build(&dataset, &colors, Some(selected));

        let highlight = payload.highlight.unwrap();
        assert_eq!(highlight.title, "Seattle");
        assert_eq!(highlight.color, SELECTED_COLOR);
        assert_relative_eq!(highlight.latitude, 47.45);
    }

    #[test]
    fn test_highlight_skipped_without_coordinates() {
        let dataset = ashrae();
        let colors = ZoneColorMap::for_dataset(&dataset);
        let payload = MapPayload::build(&dataset, &colors, Some(&dataset.records()[2]));
        assert!(payload.highlight.is_none());
        assert_eq!(payload.points.len(), 2);
    }

    #[test]
    fn test_json_shape() {
        let dataset = Dataset::from_records(
            ClimateStandard::Ecbc,
            vec![row("Delhi", "New Delhi", "Composite", None, 28.61, 77.2)],
        );
        let colors = ZoneColorMap::for_dataset(&dataset);
        let json = MapPayload::build(&dataset, &colors, None).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["standard"], "ECBC");
        assert_eq!(value["points"][0]["color"], "#dec45e");
        assert!(value["points"][0].get("zone_name").is_none());
        assert!(value["highlight"].is_null());
        assert_eq!(value["legend"][0]["label"], "Composite");
    }
}
