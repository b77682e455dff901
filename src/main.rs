//! CSV Insights - Catalog & CSV Explorer Dashboards
//!
//! Two single-page dashboards: descriptive statistics and charts for the
//! Netflix titles catalog, and a generic exploratory analysis of any CSV.

mod charts;
mod config;
mod data;
mod error;
mod export;
mod gui;
mod logging;
mod pipeline;
mod stats;

use config::DashboardConfig;
use eframe::egui;
use gui::DashboardApp;

fn main() -> anyhow::Result<()> {
    logging::init_logging()?;

    let config = DashboardConfig::default();
    tracing::info!(dataset = %config.dataset_path.display(), "starting dashboards");

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([1000.0, 700.0])
            .with_title("CSV Insights"),
        ..Default::default()
    };

    eframe::run_native(
        "CSV Insights",
        options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start the window: {}", e))
}
