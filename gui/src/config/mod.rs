// GUI configuration module
pub mod theme; // Color palettes for the light and dark views

use anyhow::{Context, Result};
use engine::config::CalculatorSettings;
use engine::grouping::DisplayGroup;
use serde::Deserialize;
use std::path::Path;

use crate::state::app_state::Theme;

// Environment variable pointing at a user configuration file that replaces the embedded default.
pub const CONFIG_ENV_VAR: &str = "PROCEEDS_CONFIG";

// Mirrors the structure of assets/config/default.json
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub version: String,
    pub app: AppSettings,
    #[serde(default)]
    pub display: DisplaySettings,
    pub calculator: CalculatorSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub title: String,
    pub theme: Theme,
    pub language: String,
    pub window_width: u32,
    pub window_height: u32,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DisplaySettings {
    #[serde(default)]
    pub groups: Vec<DisplayGroup>,
}

impl AppConfig {
    pub fn load_default() -> Result<Self> {
        let config_str = include_str!("../../assets/config/default.json"); // Path relative to this .rs file
        Self::from_json_str(config_str).context("Embedded default configuration is invalid")
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file '{}'", path.display()))?;
        Self::from_json_str(&config_str)
            .with_context(|| format!("Invalid configuration file '{}'", path.display()))
    }

    // User file from PROCEEDS_CONFIG when set, embedded default otherwise.
    pub fn load() -> Result<Self> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) if !path.trim().is_empty() => {
                tracing::info!(path = %path, "Loading configuration from {}", CONFIG_ENV_VAR);
                Self::load_from_path(path.trim())
            }
            _ => Self::load_default(),
        }
    }

    fn from_json_str(config_str: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(config_str)?;
        config.calculator.validate()?;
        config.warn_unknown_group_members();
        Ok(config)
    }

    fn warn_unknown_group_members(&self) {
        for group in &self.display.groups {
            for member in &group.members {
                if !self.calculator.owners.iter().any(|o| &o.name == member) {
                    tracing::warn!(group = %group.label, member = %member, "Display group lists an unknown owner");
                }
            }
        }
    }
}
