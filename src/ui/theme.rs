use std::fs;

use ratatui::style::Color;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};

#[derive(Embed)]
#[folder = "assets/themes/"]
struct ThemeAssets;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThemeColors {
    pub bg: String,
    pub fg: String,
    pub muted: String,
    pub accent: String,
    pub border: String,
    pub header_bg: String,
    pub header_fg: String,
    pub cell_empty: String,
    pub cell_filled: String,
    pub cell_active_bg: String,
    pub cell_active_fg: String,
    pub key_bg: String,
    pub key_fg: String,
    pub key_selected_bg: String,
    pub key_selected_fg: String,
    pub button_enabled_bg: String,
    pub button_enabled_fg: String,
    pub button_disabled_bg: String,
    pub button_disabled_fg: String,
    pub overlay_bg: String,
    pub info: String,
    pub error: String,
    pub success: String,
}

impl Theme {
    pub fn load(name: &str) -> Option<Self> {
        // Try user themes dir
        if let Some(config_dir) = dirs::config_dir() {
            let user_theme_path = config_dir
                .join("cryptic")
                .join("themes")
                .join(format!("{name}.toml"));
            if let Ok(content) = fs::read_to_string(&user_theme_path) {
                if let Ok(theme) = toml::from_str::<Theme>(&content) {
                    return Some(theme);
                }
            }
        }

        // Try bundled themes
        let filename = format!("{name}.toml");
        if let Some(file) = ThemeAssets::get(&filename) {
            if let Ok(content) = std::str::from_utf8(file.data.as_ref()) {
                if let Ok(theme) = toml::from_str::<Theme>(content) {
                    return Some(theme);
                }
            }
        }

        None
    }

    pub fn available_themes() -> Vec<String> {
        ThemeAssets::iter()
            .filter_map(|f| f.strip_suffix(".toml").map(|n| n.to_string()))
            .collect()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::load("catppuccin-mocha").unwrap_or_else(|| Self {
            name: "default".to_string(),
            colors: ThemeColors::default(),
        })
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            bg: "#1e1e2e".to_string(),
            fg: "#cdd6f4".to_string(),
            muted: "#585b70".to_string(),
            accent: "#89b4fa".to_string(),
            border: "#45475a".to_string(),
            header_bg: "#313244".to_string(),
            header_fg: "#cdd6f4".to_string(),
            cell_empty: "#45475a".to_string(),
            cell_filled: "#cdd6f4".to_string(),
            cell_active_bg: "#f9e2af".to_string(),
            cell_active_fg: "#1e1e2e".to_string(),
            key_bg: "#313244".to_string(),
            key_fg: "#cdd6f4".to_string(),
            key_selected_bg: "#89b4fa".to_string(),
            key_selected_fg: "#1e1e2e".to_string(),
            button_enabled_bg: "#a6e3a1".to_string(),
            button_enabled_fg: "#1e1e2e".to_string(),
            button_disabled_bg: "#313244".to_string(),
            button_disabled_fg: "#585b70".to_string(),
            overlay_bg: "#11111b".to_string(),
            info: "#89b4fa".to_string(),
            error: "#f38ba8".to_string(),
            success: "#a6e3a1".to_string(),
        }
    }
}

impl ThemeColors {
    pub fn parse_color(hex: &str) -> Color {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return Color::Rgb(r, g, b);
            }
        }
        Color::White
    }

    pub fn bg(&self) -> Color { Self::parse_color(&self.bg) }
    pub fn fg(&self) -> Color { Self::parse_color(&self.fg) }
    pub fn muted(&self) -> Color { Self::parse_color(&self.muted) }
    pub fn accent(&self) -> Color { Self::parse_color(&self.accent) }
    pub fn border(&self) -> Color { Self::parse_color(&self.border) }
    pub fn header_bg(&self) -> Color { Self::parse_color(&self.header_bg) }
    pub fn header_fg(&self) -> Color { Self::parse_color(&self.header_fg) }
    pub fn cell_empty(&self) -> Color { Self::parse_color(&self.cell_empty) }
    pub fn cell_filled(&self) -> Color { Self::parse_color(&self.cell_filled) }
    pub fn cell_active_bg(&self) -> Color { Self::parse_color(&self.cell_active_bg) }
    pub fn cell_active_fg(&self) -> Color { Self::parse_color(&self.cell_active_fg) }
    pub fn key_bg(&self) -> Color { Self::parse_color(&self.key_bg) }
    pub fn key_fg(&self) -> Color { Self::parse_color(&self.key_fg) }
    pub fn key_selected_bg(&self) -> Color { Self::parse_color(&self.key_selected_bg) }
    pub fn key_selected_fg(&self) -> Color { Self::parse_color(&self.key_selected_fg) }
    pub fn button_enabled_bg(&self) -> Color { Self::parse_color(&self.button_enabled_bg) }
    pub fn button_enabled_fg(&self) -> Color { Self::parse_color(&self.button_enabled_fg) }
    pub fn button_disabled_bg(&self) -> Color { Self::parse_color(&self.button_disabled_bg) }
    pub fn button_disabled_fg(&self) -> Color { Self::parse_color(&self.button_disabled_fg) }
    pub fn overlay_bg(&self) -> Color { Self::parse_color(&self.overlay_bg) }
    pub fn info(&self) -> Color { Self::parse_color(&self.info) }
    pub fn error(&self) -> Color { Self::parse_color(&self.error) }
    pub fn success(&self) -> Color { Self::parse_color(&self.success) }
}
