// Main entry point - Dependency injection and a scripted dashboard session
use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use line_monitor::application::chart_options::DEFAULT_THEME;
use line_monitor::application::clock::SystemClock;
use line_monitor::application::dashboard_service::DashboardService;
use line_monitor::application::device_store::DeviceDataStore;
use line_monitor::application::snapshot_builder::DeviceSnapshotBuilder;
use line_monitor::application::time_series::TimeSeriesGenerator;
use line_monitor::domain::catalog::TimeRange;
use line_monitor::infrastructure::config::load_dashboard_config;
use line_monitor::infrastructure::json_lines::{JsonLinesEngine, StaticContainerResolver};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr, chart output to stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = load_dashboard_config()?;
    let catalog = Arc::new(config.catalog.to_catalog()?);

    let seed = config
        .seed
        .unwrap_or_else(|| Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64);
    tracing::info!("Using generator seed {}", seed);

    // Create generators and store (application layer)
    let generator = TimeSeriesGenerator::new(Arc::new(SystemClock));
    let builder =
        DeviceSnapshotBuilder::new(catalog.clone(), generator, StdRng::seed_from_u64(seed));
    let store = DeviceDataStore::new(builder);

    let mut service = DashboardService::new(store, JsonLinesEngine::stdout(), DEFAULT_THEME);

    let machine = catalog
        .default_machine(&config.default_region)
        .with_context(|| format!("region `{}` is not in the catalog", config.default_region))?
        .to_string();

    // A partially mounted dashboard keeps running
    let resolver = StaticContainerResolver::dashboard();
    if let Err(e) = service.start(&resolver, config.default_time_range) {
        tracing::warn!("Dashboard started with errors: {}", e);
    }
    service.render_machine(&machine)?;

    if let Some(snapshot) = service.snapshot(&machine) {
        tracing::info!(
            "{}: total rate {}%, {} rejections, avg slope {}",
            machine,
            snapshot.summary.total_rate,
            snapshot.summary.formatted_total_rejections(),
            snapshot.summary.avg_slope
        );
    }

    service.switch_time_range(TimeRange::SevenDays, &machine)?;
    service.resize();
    service.shutdown();

    Ok(())
}
