// config.rs - Read-only application settings
//
// Settings cover the window and logging only. The count is never written
// anywhere, and the cap and burst parameters are not configurable.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{CONFIG_DIR_NAME, DEFAULT_HEIGHT, DEFAULT_WIDTH, MIN_HEIGHT, MIN_WIDTH};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_width: u32,
    pub window_height: u32,
    /// Default `env_logger` filter; `RUST_LOG` still wins when set
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_WIDTH,
            window_height: DEFAULT_HEIGHT,
            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    /// `<config_dir>/AchievementCounter/settings.json`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME)
            .join("settings.json")
    }

    /// Load from the default location. A missing file yields the defaults;
    /// an unreadable or malformed one is an error the caller falls back from.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {:?}", path))?;
        let settings: Settings = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings file {:?}", path))?;
        Ok(settings.clamped())
    }

    /// Keep the window no smaller than the layout needs
    fn clamped(mut self) -> Self {
        self.window_width = self.window_width.max(MIN_WIDTH);
        self.window_height = self.window_height.max(MIN_HEIGHT);
        self
    }
}
