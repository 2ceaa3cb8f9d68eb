//! Gomoku GUI
//!
//! Play five-in-a-row against the local heuristic AI or a model advisor.

use std::sync::Arc;

use gomoku::advisor::UnconfiguredAdvisor;
use gomoku::config::Settings;
use gomoku::ui::GomokuApp;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::from_env().unwrap_or_else(|err| {
        warn!(error = %err, "ignoring invalid settings");
        Settings::default()
    });
    info!(mode = %settings.ai_mode, human = ?settings.human_color, "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([700.0, 520.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, &settings, Arc::new(UnconfiguredAdvisor))))),
    )
}
