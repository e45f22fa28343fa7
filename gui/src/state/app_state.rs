// View-level state of the GUI. The calculator inputs live in their own signal (see app.rs);
// this only covers how the report is presented.

use serde::{Deserialize, Serialize};

use crate::config::theme::ThemePalette;
use crate::config::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub current_theme: Theme,
    pub language: String, // e.g., "es-CO"
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_theme: Theme::Light,
            language: "es-CO".to_string(),
        }
    }
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            current_theme: config.app.theme,
            language: config.app.language.clone(),
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.current_theme = theme;
    }

    pub fn toggle_theme(&mut self) {
        let next = match self.current_theme {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        };
        tracing::debug!(?next, "Switching theme");
        self.set_theme(next);
    }

    pub fn palette(&self) -> ThemePalette {
        ThemePalette::for_theme(&self.current_theme)
    }
}
