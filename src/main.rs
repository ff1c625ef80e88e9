//! Tabpad - tabbed plain-text notepad
//!
//! Open, edit, color, and save text files, one per tab.

mod app;
mod core;
mod ui;

use app::TabpadApp;
use crate::core::config::AppConfig;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    tracing::info!("Starting Tabpad...");

    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Using default config: {:#}", e);
        AppConfig::default()
    });

    let window = &config.window;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([window.width, window.height])
            .with_resizable(window.resizable)
            .with_title(window.title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        "Tabpad",
        native_options,
        Box::new(|cc| Ok(Box::new(TabpadApp::new(cc, config)))),
    )
}
