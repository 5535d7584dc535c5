//! Search bar demo: hosts one debounced search input in an eframe window.

#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;

use anyhow::Result;
use search_bar::settings::{self, SettingsRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("search_bar=debug,search_bar_demo=debug,warn")
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting search bar demo v{}", env!("CARGO_PKG_VERSION"));

    let data_dir = settings::default_data_dir()?;
    let settings = SettingsRepository::new(&data_dir);
    let window = settings.get().window.clone();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Search Bar")
            .with_inner_size([window.width, window.height])
            .with_min_inner_size([360.0, 240.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Search Bar",
        native_options,
        Box::new(
            move |cc| -> std::result::Result<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>> {
                Ok(Box::new(app::SearchDemoApp::new(cc, settings)?))
            },
        ),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
