//! ASHRAE passive design strategies
//!
//! Keyed by climate zone *name* ("Hot Dry", "Cool Marine"), not by the zone
//! code. Dataset names carry qualifiers ("Very Hot Dry"), so most rows reach
//! these keys through the containment fallback.

use super::{CatalogEntry, StrategyEntry};

pub(super) static ASHRAE_CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        key: "Hot Dry",
        title: "Hot-Dry",
        accent_color: "#dc3545",
        strategies: [
            StrategyEntry {
                name: "Surface area to volume ratio",
                image_ref: "images/surface_ratio.png",
                description: "In hot & dry regions, building's shape needs to be compact to reduce heat gain and losses, respectively. The surface to volume(S/V) ratio of the building should be as low as possible to minimize heat gain.",
            },
            StrategyEntry {
                name: "Evaporative Cooling",
                image_ref: "images/evaporative_cooling.png",
                description: "Evaporative cooling is mostly effective in hot and dry climate where the humidity is low. Water in pools and fountains can be used as a cooling element along with cross-ventilating arrangement of openings.",
            },
            StrategyEntry {
                name: "Cool Roof",
                image_ref: "images/cool_roof.png",
                description: "Cool roofs reflect most of the solar radiation and efficiently emit some of the absorbed radiation back into the atmosphere, instead of conducting it to the building below.",
            },
        ],
    },
    CatalogEntry {
        key: "Hot Humid",
        title: "Hot-Humid",
        accent_color: "#ff6b35",
        strategies: [
            StrategyEntry {
                name: "Natural Ventilation",
                image_ref: "images/natural_ventilation.png",
                description: "In hot-humid climates, maximizing natural ventilation is crucial. Cross-ventilation and stack ventilation help remove excess humidity and heat from indoor spaces.",
            },
            StrategyEntry {
                name: "Shading Devices",
                image_ref: "images/shading_devices.png",
                description: "External shading devices like overhangs, louvers, and vegetation prevent direct solar radiation while allowing natural light and ventilation.",
            },
            StrategyEntry {
                name: "Elevated Buildings",
                image_ref: "images/elevated_buildings.png",
                description: "Elevating buildings on stilts or pillars improves air circulation underneath, reduces ground moisture impact, and enhances cooling through natural ventilation.",
            },
        ],
    },
    CatalogEntry {
        key: "Warm Humid",
        title: "Warm-Humid",
        accent_color: "#ffa500",
        strategies: [
            StrategyEntry {
                name: "Orientation and Layout",
                image_ref: "images/orientation_layout.png",
                description: "Building orientation should maximize exposure to prevailing breezes while minimizing direct solar exposure. Open floor plans facilitate air movement.",
            },
            StrategyEntry {
                name: "Thermal Mass Control",
                image_ref: "images/thermal_mass_control.png",
                description: "Use lightweight construction with low thermal mass to prevent heat storage. Materials should cool quickly during night hours.",
            },
            StrategyEntry {
                name: "Moisture Management",
                image_ref: "images/moisture_management.png",
                description: "Design details should prevent moisture accumulation through proper drainage, vapor barriers, and moisture-resistant materials.",
            },
        ],
    },
    CatalogEntry {
        key: "Mixed Dry",
        title: "Mixed-Dry",
        accent_color: "#28a745",
        strategies: [
            StrategyEntry {
                name: "Thermal Mass",
                image_ref: "images/thermal_mass.png",
                description: "Use high thermal mass materials like concrete or masonry to store heat during day and release at night, moderating temperature swings.",
            },
            StrategyEntry {
                name: "Passive Solar Design",
                image_ref: "images/passive_solar.png",
                description: "South-facing windows with proper overhangs capture winter sun for heating while blocking summer sun to reduce cooling needs.",
            },
            StrategyEntry {
                name: "Night Ventilation",
                image_ref: "images/night_ventilation.png",
                description: "Open windows during cool nights to flush out daytime heat and cool thermal mass for the next day.",
            },
        ],
    },
    CatalogEntry {
        key: "Mixed Humid",
        title: "Mixed-Humid",
        accent_color: "#17a2b8",
        strategies: [
            StrategyEntry {
                name: "Dehumidification",
                image_ref: "images/dehumidification.png",
                description: "Incorporate passive dehumidification through proper ventilation design and moisture control strategies to maintain comfort.",
            },
            StrategyEntry {
                name: "Insulation Balance",
                image_ref: "images/insulation_balance.png",
                description: "Moderate insulation levels balance heating and cooling needs while preventing condensation issues in varying humidity conditions.",
            },
            StrategyEntry {
                name: "Rainwater Management",
                image_ref: "images/rainwater_management.png",
                description: "Effective gutters, downspouts, and drainage systems prevent water intrusion and manage high precipitation levels.",
            },
        ],
    },
    CatalogEntry {
        key: "Cool Dry",
        title: "Cool",
        accent_color: "#6610f2",
        strategies: [
            StrategyEntry {
                name: "Solar Heat Gain",
                image_ref: "images/solar_heat_gain.png",
                description: "Maximize south-facing glazing to capture solar heat. Use thermal storage walls or floors to store and redistribute heat.",
            },
            StrategyEntry {
                name: "Insulation",
                image_ref: "images/insulation.png",
                description: "High levels of insulation in walls, roof, and foundation minimize heat loss and reduce heating demands significantly.",
            },
            StrategyEntry {
                name: "Windbreaks",
                image_ref: "images/windbreaks.png",
                description: "Strategic placement of vegetation or structures on north and west sides reduce cold wind impact and heat loss.",
            },
        ],
    },
    CatalogEntry {
        key: "Cold Dry",
        title: "Cold",
        accent_color: "#0d6efd",
        strategies: [
            StrategyEntry {
                name: "Compact Design",
                image_ref: "images/compact_design.png",
                description: "Minimize surface area to volume ratio to reduce heat loss. Compact, clustered designs with minimal exposed surfaces work best.",
            },
            StrategyEntry {
                name: "Vestibules & Airlocks",
                image_ref: "images/vestibules_airlocks.png",
                description: "Entry vestibules create buffer zones that prevent direct cold air infiltration and reduce heat loss through doorways.",
            },
            StrategyEntry {
                name: "Super Insulation",
                image_ref: "images/super_insulation.png",
                description: "Extra-thick insulation (R-40+ walls, R-60+ roof) combined with triple-glazed windows minimizes heat loss in extreme cold.",
            },
        ],
    },
    CatalogEntry {
        key: "Cool Marine",
        title: "Marine",
        accent_color: "#20c997",
        strategies: [
            StrategyEntry {
                name: "Moisture Protection",
                image_ref: "images/moisture_protection.png",
                description: "Advanced water-resistant barriers and proper flashing details protect against persistent moisture and salt spray in marine climates.",
            },
            StrategyEntry {
                name: "Moderate Insulation",
                image_ref: "images/moderate_insulation.png",
                description: "Balanced insulation addresses mild winters and cool summers while managing high humidity levels typical of marine climates.",
            },
            StrategyEntry {
                name: "Daylighting",
                image_ref: "images/daylighting.png",
                description: "Maximize natural light through windows and skylights to compensate for frequently overcast conditions in marine climates.",
            },
        ],
    },
];
