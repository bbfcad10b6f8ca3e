//! Zone Color Assignment
//!
//! Two policies, chosen by the dataset's standard:
//! - Palette cycling (ASHRAE): zones are sorted and each takes the palette
//!   entry at its index, wrapping when there are more zones than colors.
//! - Named table (ECBC): the five canonical ECBC zones have fixed colors.
//!
//! Both fall back to [`DEFAULT_COLOR`] for zones they do not know. Inputs are
//! trimmed before lookup.

use serde::Serialize;

use crate::data::Dataset;
use crate::standard::ClimateStandard;

/// Color for zones outside the active mapping
pub const DEFAULT_COLOR: &str = "#444444";

/// Color of the highlighted (selected) map point
pub const SELECTED_COLOR: &str = "#ff0000";

/// Base palette for code-style zones
pub static PALETTE: &[&str] = &[
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd",
    "#8c564b", "#e377c2", "#7f7f7f", "#bcbd22", "#17becf",
    "#005f99", "#cc5500", "#009933", "#990000", "#663399",
    "#00b3b3", "#b30047", "#ff66b2", "#66ff66", "#ffd966",
];

/// ECBC zone colors
pub static ECBC_COLORS: &[(&str, &str)] = &[
    ("Cold", "#02a0c5"),
    ("Composite", "#dec45e"),
    ("Hot-Dry", "#c60102"),
    ("Temperate", "#f89cc9"),
    ("Warm-Humid", "#e59704"),
];

/// Color assignment policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColorPolicy {
    PaletteCycling,
    NamedTable,
}

impl From<ClimateStandard> for ColorPolicy {
    fn from(standard: ClimateStandard) -> Self {
        match standard {
            ClimateStandard::Ashrae => ColorPolicy::PaletteCycling,
            ClimateStandard::Ecbc => ColorPolicy::NamedTable,
        }
    }
}

/// Palette color for `zone` within a sorted distinct zone set.
///
/// The assignment depends on the whole set: adding a zone shifts every zone
/// sorted after it.
pub fn palette_color(zone_set: &[String], zone: &str) -> &'static str {
    let zone = zone.trim();
    zone_set
        .iter()
        .position(|z| z.trim() == zone)
        .map(|idx| PALETTE[idx % PALETTE.len()])
        .unwrap_or(DEFAULT_COLOR)
}

/// Fixed ECBC color for a zone name
pub fn named_color(zone: &str) -> &'static str {
    let zone = zone.trim();
    ECBC_COLORS
        .iter()
        .find(|(name, _)| *name == zone)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_COLOR)
}

/// Zone → color mapping for one dataset
#[derive(Debug, Clone, Serialize)]
pub struct ZoneColorMap {
    policy: ColorPolicy,
    /// Sorted, trimmed, distinct
    zones: Vec<String>,
}

impl ZoneColorMap {
    /// Build from a zone list; the list is trimmed, sorted and deduplicated.
    pub fn new(policy: ColorPolicy, zones: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        let mut zones: Vec<String> = zones
            .into_iter()
            .map(|z| z.as_ref().trim().to_string())
            .collect();
        zones.sort();
        zones.dedup();
        Self { policy, zones }
    }

    pub fn for_dataset(dataset: &Dataset) -> Self {
        Self::new(dataset.standard().into(), dataset.zones())
    }

    pub fn policy(&self) -> ColorPolicy {
        self.policy
    }

    pub fn zones(&self) -> &[String] {
        &self.zones
    }

    pub fn color_for(&self, zone: &str) -> &'static str {
        match self.policy {
            ColorPolicy::PaletteCycling => palette_color(&self.zones, zone),
            ColorPolicy::NamedTable => named_color(zone),
        }
    }

    /// (zone, color) pairs in sorted zone order
    pub fn legend(&self) -> Vec<(&str, &'static str)> {
        self.zones
            .iter()
            .map(|z| (z.as_str(), self.color_for(z)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_has_twenty_distinct_colors() {
        let mut colors: Vec<&str> = PALETTE.to_vec();
        colors.sort();
        colors.dedup();
        assert_eq!(colors.len(), 20);
    }

    #[test]
    fn test_palette_assignment_is_sorted_order() {
        let map = ZoneColorMap::new(ColorPolicy::PaletteCycling, ["3B", "1A", " 2A "]);
        assert_eq!(map.zones(), &["1A", "2A", "3B"]);
        assert_eq!(map.color_for("1A"), "#1f77b4");
        assert_eq!(map.color_for("2A"), "#ff7f0e");
        assert_eq!(map.color_for(" 3B"), "#2ca02c");
        assert_eq!(map.color_for("9Z"), DEFAULT_COLOR);
    }

    #[test]
    fn test_color_deterministic() {
        let map = ZoneColorMap::new(ColorPolicy::PaletteCycling, ["4C", "5A", "0B"]);
        let again = ZoneColorMap::new(ColorPolicy::PaletteCycling, ["5A", "0B", "4C"]);
        for zone in ["4C", "5A", "0B"] {
            assert_eq!(map.color_for(zone), map.color_for(zone));
            assert_eq!(map.color_for(zone), again.color_for(zone));
        }
    }

    #[test]
    fn test_palette_wraps() {
        let zones: Vec<String> = (0..45).map(|i| format!("Z{:02}", i)).collect();
        let map = ZoneColorMap::new(ColorPolicy::PaletteCycling, &zones);
        for (i, zone) in zones.iter().enumerate() {
            let base = &zones[i % PALETTE.len()];
            assert_eq!(map.color_for(zone), map.color_for(base));
        }
        assert_eq!(map.color_for("Z20"), PALETTE[0]);
        assert_eq!(map.color_for("Z41"), PALETTE[1]);
    }

    #[test]
    fn test_named_table() {
        assert_eq!(named_color("Composite"), "#dec45e");
        assert_eq!(named_color("  Cold "), "#02a0c5");
        assert_eq!(named_color("Hot-Dry"), "#c60102");
        assert_eq!(named_color("Temperate"), "#f89cc9");
        assert_eq!(named_color("Warm-Humid"), "#e59704");
        assert_eq!(named_color("Tropical"), DEFAULT_COLOR);
    }

    #[test]
    fn test_legend_order() {
        let map = ZoneColorMap::new(ColorPolicy::NamedTable, ["Warm-Humid", "Cold", "Unknown"]);
        let legend = map.legend();
        assert_eq!(
            legend,
            vec![
                ("Cold", "#02a0c5"),
                ("Unknown", DEFAULT_COLOR),
                ("Warm-Humid", "#e59704"),
            ]
        );
    }
}
