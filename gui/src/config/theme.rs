// Light and dark palettes and the table styles derived from them
use serde::{Deserialize, Serialize};

use crate::state::app_state::Theme;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub background: String,
    pub foreground: String,
    pub table_header: String,
    pub table_border: String,
    pub total_row: String,
    pub warning: String,
    pub negative: String,
}

impl ThemePalette {
    pub fn for_theme(theme: &Theme) -> Self {
        match theme {
            Theme::Dark => Self::default_dark(),
            Theme::Light => Self::default_light(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#1e1e1e".to_string(),
            foreground: "#d1d4dc".to_string(),
            table_header: "#2d2d30".to_string(),
            table_border: "#3e3e42".to_string(),
            total_row: "#252526".to_string(),
            warning: "#ffb74d".to_string(),
            negative: "#ef5350".to_string(),
        }
    }

    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            foreground: "#000000".to_string(),
            table_header: "#f5f5f5".to_string(),
            table_border: "#d0d0d0".to_string(),
            total_row: "#eef6f5".to_string(),
            warning: "#e65100".to_string(),
            negative: "#c62828".to_string(),
        }
    }

    pub fn cell_style(&self) -> String {
        format!("border: 1px solid {}; padding: 4px 8px; text-align: right;", self.table_border)
    }

    pub fn label_cell_style(&self) -> String {
        format!("border: 1px solid {}; padding: 4px 8px; text-align: left;", self.table_border)
    }

    pub fn header_style(&self) -> String {
        format!(
            "border: 1px solid {}; padding: 4px 8px; background-color: {};",
            self.table_border, self.table_header
        )
    }

    pub fn total_row_style(&self) -> String {
        format!("font-weight: bold; background-color: {};", self.total_row)
    }
}
