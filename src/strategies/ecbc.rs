//! ECBC passive design strategies, one entry per ECBC climate zone.

use super::{CatalogEntry, StrategyEntry};

pub(super) static ECBC_CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        key: "Cold",
        title: "Cold",
        accent_color: "#02a0c5",
        strategies: [
            StrategyEntry {
                name: "Surface area to volume ratio",
                image_ref: "images/climate_zone_finder.png",
                description: "In cold regions, building's shape needs to be compact to reduce heat gain and losses, respectively. The surface to volume(S/V) ratio of the building should be as low as possible to minimize heat loss.",
            },
            StrategyEntry {
                name: "Sun Space",
                image_ref: "images/sun_space.png",
                description: "The south facing sun space to catch maximum heat inside. The trapped heat keeps the indoor warm in the cold climate.",
            },
            StrategyEntry {
                name: "Trombe Wall",
                image_ref: "images/trombe_wall.png",
                description: "The hot air between the glazing and the wall gets heated up and enters inside to store sensible heat.",
            },
        ],
    },
    CatalogEntry {
        key: "Composite",
        title: "Composite",
        accent_color: "#dec45e",
        strategies: [
            StrategyEntry {
                name: "Shading",
                image_ref: "images/shading_windows.png",
                description: "Extended roof, horizontal overhangs over the windows are effective in shading. These devices are designed to block the summer sun but allowing the winter sun.",
            },
            StrategyEntry {
                name: "Cool Roof",
                image_ref: "images/Cool_Roof.png",
                description: "Cool roofs reflect most of the solar radiation and efficiently emit some of the absorbed radiation back into the atmosphere, instead of conducting it to the building below.",
            },
            StrategyEntry {
                name: "Light Shelf",
                image_ref: "images/Light_shelf.png",
                description: "The external light shelves to penetrate diffused light inside the space. They serve the dual purpose by acting as a shading device.",
            },
        ],
    },
    CatalogEntry {
        key: "Hot-Dry",
        title: "Hot-Dry",
        accent_color: "#c60102",
        strategies: [
            StrategyEntry {
                name: "Surface area to volume ratio",
                image_ref: "images/climate_zone_finder.png",
                description: "In hot & dry regions, building's shape needs to be compact to reduce heat gain and losses, respectively. The surface to volume(S/V) ratio of the building should be as low as possible to minimize heat gain.",
            },
            StrategyEntry {
                name: "Evaporative Cooling",
                image_ref: "images/Evaporative_Cooling.png",
                description: "Evaporative cooling is mostly effective in hot and dry climate where the humidity is low. Water in pools and fountains can be used as a cooling element along with cross-ventilating arrangement of openings.",
            },
            StrategyEntry {
                name: "Cool Roof",
                image_ref: "images/Cool_Roof.png",
                description: "Cool roofs reflect most of the solar radiation and efficiently emit some of the absorbed radiation back into the atmosphere, instead of conducting it to the building below.",
            },
        ],
    },
    CatalogEntry {
        key: "Temperate",
        title: "Temperate",
        accent_color: "#f89cc9",
        strategies: [
            StrategyEntry {
                name: "Natural ventilation",
                image_ref: "images/natural_ventilation.png",
                description: "Naturally ventilated buildings rely on wind that is naturally prevalent at the site. The fenestrations of the building should be designed to capture the breeze for effective ventilation.",
            },
            StrategyEntry {
                name: "Shaded Verandahs",
                image_ref: "images/Shaded_verandahs.png",
                description: "Extended roof, horizontal overhangs over the windows are effective in shading. These devices can be designed to be fixed or moveable, so you can adjust them according.",
            },
            StrategyEntry {
                name: "Orientation",
                image_ref: "images/orientation.png",
                description: "By orienting the shorter sides of the building in the direction of strongest solar radiation, the thermal impact from solar radiation is minimised.",
            },
        ],
    },
    CatalogEntry {
        key: "Warm-Humid",
        title: "Warm-Humid",
        accent_color: "#e59704",
        strategies: [
            StrategyEntry {
                name: "Siting- Design for prevalent wind patterns",
                image_ref: "images/Siting_Prevailing_wind.png",
                description: "In warm and humid climates, buildings are placed on site to catch maximum wind. The plantations help channelize and filter the wind.",
            },
            StrategyEntry {
                name: "Shaded Verandahs",
                image_ref: "images/Shaded_verandahs.png",
                description: "Extended roof, horizontal overhangs over the windows are effective in shading. These devices can be designed to be fixed or moveable, so you can adjust them according.",
            },
            StrategyEntry {
                name: "Natural ventilation",
                image_ref: "images/natural_ventilation.png",
                description: "In humid climates such as that prevailing in Coastal regions, ventilation can bring in much needed relief. Naturally ventilated buildings rely on wind that is naturally prevalent at the site.",
            },
        ],
    },
];
