#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![allow(clippy::collapsible_if)]

mod app;
mod unit_picker;
mod views;

use app::UnitConverterApp;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use uc_app::ConverterConfig;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = load_config(std::env::args_os().nth(1).map(PathBuf::from));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 700.0])
            .with_title("Unit Converter"),
        ..Default::default()
    };

    eframe::run_native(
        "Unit Converter",
        options,
        Box::new(|cc| Ok(Box::new(UnitConverterApp::new(cc, config)))),
    )
}

fn load_config(path: Option<PathBuf>) -> ConverterConfig {
    let Some(path) = path else {
        return ConverterConfig::default();
    };
    match ConverterConfig::load(&path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "falling back to default settings");
            ConverterConfig::default()
        }
    }
}
