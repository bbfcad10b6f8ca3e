// Climate zone report generator
//
// Resolves one (region, location) selection and writes the PDF report, a
// markdown copy and the map payload into OUTPUT_DIR.
// Usage: CLIMATE_STANDARD=ECBC REGION=Delhi LOCATION="New Delhi" cargo run --bin climate_report

use anyhow::Context;
use climate_zone_finder::report::MarkdownFormatter;
use climate_zone_finder::{export_document, ClimateZoneFinder, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "climate_zone_finder=info,climate_report=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("invalid configuration")?;

    tracing::info!("Configuration:");
    tracing::info!("  CLIMATE_STANDARD: {}", config.standard);
    tracing::info!("  DATASET: {}", config.dataset_path().display());
    tracing::info!("  IMAGES_DIR: {}", config.images_dir.display());
    tracing::info!("  OUTPUT_DIR: {}", config.output_dir.display());

    let finder = ClimateZoneFinder::open(config.dataset_path(), config.standard)
        .with_context(|| format!("failed to load {}", config.dataset_path().display()))?;

    let Some((default_region, default_location)) = finder.default_selection() else {
        tracing::warn!("Dataset is empty; nothing to report");
        return Ok(());
    };

    let region = config.region.as_deref().unwrap_or(default_region);
    let location = match config.location.as_deref() {
        Some(location) => location,
        None => finder
            .locations_for(region)
            .first()
            .copied()
            .unwrap_or(default_location),
    };

    tracing::info!("Selected {} / {}", region, location);

    let resolution = finder.lookup(region, location);
    let Some(record) = resolution.record() else {
        tracing::warn!("No climate record for {} / {}; nothing written", region, location);
        return Ok(());
    };

    let report = finder.report_for(record);
    tracing::info!(
        "Climate zone: {} (color {}, {} strategies)",
        report.zone_display(),
        report.zone_color,
        report.strategies.len()
    );

    std::fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("failed to create {}", config.output_dir.display()))?;

    let pdf_path = config.output_dir.join(report.file_name());

    // A failed PDF render still leaves the markdown and map outputs
    match export_document(&report, &config.images_dir) {
        Ok(document) => {
            std::fs::write(&pdf_path, &document.bytes)
                .with_context(|| format!("failed to write {}", pdf_path.display()))?;
            tracing::info!("Wrote {}", pdf_path.display());
        }
        Err(err) if !err.is_fatal() => tracing::error!("PDF export skipped: {}", err),
        Err(err) => return Err(err.into()),
    }

    let markdown_path = pdf_path.with_extension("md");
    std::fs::write(&markdown_path, MarkdownFormatter::format(&report))
        .with_context(|| format!("failed to write {}", markdown_path.display()))?;
    tracing::info!("Wrote {}", markdown_path.display());

    if let Err(err) = resolution.coordinates() {
        tracing::warn!("{}; map payload skipped", err);
    } else {
        let map_path = pdf_path.with_extension("map.json");
        let payload = finder.map_payload(Some(record)).to_json()?;
        std::fs::write(&map_path, payload)
            .with_context(|| format!("failed to write {}", map_path.display()))?;
        tracing::info!("Wrote {}", map_path.display());
    }

    Ok(())
}
