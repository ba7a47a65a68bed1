//! Jotter Desktop Application
//!
//! A small desktop board of colored notes.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod state;
mod theme;
mod views;

use std::path::PathBuf;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use jotter_core::config::{load_settings, SETTINGS_FILE_NAME};
use jotter_core::models::Settings;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "jotter_core=debug,jotter_desktop=debug";

fn main() {
    // RUST_LOG overrides the default filter
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    tracing::info!("Starting Jotter...");

    let settings = resolve_settings();

    let window = WindowBuilder::new()
        .with_title("Jotter")
        .with_inner_size(LogicalSize::new(
            f64::from(settings.window_width),
            f64::from(settings.window_height),
        ));
    let config = Config::new().with_window(window);

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .with_context(settings)
        .launch(app::App);
}

fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("jotter").join(SETTINGS_FILE_NAME))
}

/// Load settings from the user config directory, falling back to defaults
fn resolve_settings() -> Settings {
    let Some(path) = settings_path() else {
        tracing::debug!("No config directory on this platform, using default settings");
        return Settings::default();
    };

    match load_settings(&path) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Ignoring settings at {}: {}", path.display(), e);
            Settings::default()
        }
    }
}
