// GUI main entry point using Dioxus
#![allow(non_snake_case)] // Common for Dioxus components

use dioxus::prelude::*;
// Desktop specific imports for Dioxus
use dioxus_desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};

mod app;
mod components;
mod config;
mod state;

use app::App;
use config::AppConfig;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    tracing::info!("Starting proceeds calculator GUI (Dioxus Desktop)...");

    let app_config = match AppConfig::load() {
        Ok(cfg) => {
            tracing::info!(
                owners = cfg.calculator.owners.len(),
                "Successfully loaded configuration version {}.",
                cfg.version
            );
            cfg
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {:#}. Exiting.", e);
            return Err(e);
        }
    };

    let desktop_config = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(app_config.app.title.clone())
            .with_inner_size(LogicalSize::new(
                app_config.app.window_width as f64,
                app_config.app.window_height as f64,
            )),
    );

    // AppConfig is provided as root context; App reads it with use_context.
    LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .with_context(app_config)
        .launch(App);

    tracing::info!("Proceeds calculator GUI finished.");
    Ok(())
}
