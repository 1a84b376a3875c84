use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::puzzle::video::DEFAULT_EMBED_BASE;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_embed_base")]
    pub embed_base: String,
    #[serde(default = "default_index_page")]
    pub index_page: String,
    #[serde(default = "default_info_message")]
    pub info_message: String,
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

fn default_theme() -> String {
    "catppuccin-mocha".to_string()
}
fn default_tick_rate_ms() -> u64 {
    100
}
fn default_embed_base() -> String {
    DEFAULT_EMBED_BASE.to_string()
}
fn default_index_page() -> String {
    "index.html".to_string()
}
fn default_info_message() -> String {
    "Clues have two parts: the definition and the wordplay!".to_string()
}
fn default_log_file() -> String {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cryptic")
        .join("cryptic.log")
        .to_string_lossy()
        .to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            tick_rate_ms: default_tick_rate_ms(),
            embed_base: default_embed_base(),
            index_page: default_index_page(),
            info_message: default_info_message(),
            log_file: default_log_file(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config.normalized())
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cryptic")
            .join("config.toml")
    }

    /// A zero tick rate would spin the event thread.
    pub fn normalized(mut self) -> Self {
        if self.tick_rate_ms == 0 {
            self.tick_rate_ms = default_tick_rate_ms();
        }
        self
    }
}
