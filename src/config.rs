//! Menu Configuration
//!
//! Loads the menu configuration from a JSON file: which game variant to
//! present, and the table of named sprite sheets the menu may load.
//! The variant value is the explicit input that selects the container --
//! there is no hidden global game switch.

use crate::menu::GameVariant;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Definition of one sprite sheet: image file plus a uniform frame grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteSheetDef {
    /// Image path, relative to the working directory
    pub image: String,

    /// Width of one frame cell in pixels
    pub frame_width: u32,

    /// Height of one frame cell in pixels
    pub frame_height: u32,

    /// Number of frames in the sheet
    pub frame_count: u32,
}

/// Top-level menu configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Which game variant's menu to show
    pub variant: GameVariant,

    /// Named sprite sheets available to the menu
    pub sheets: HashMap<String, SpriteSheetDef>,
}

impl MenuConfig {
    /// Loads the configuration from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.display().to_string(), e.to_string()))?;
        let config: MenuConfig = serde_json::from_str(&content)
            .map_err(|e| ConfigError::Parse(path.display().to_string(), e.to_string()))?;
        Ok(config)
    }

    /// Looks up a sprite sheet definition by name
    pub fn sheet(&self, name: &str) -> Result<&SpriteSheetDef, ConfigError> {
        self.sheets
            .get(name)
            .ok_or_else(|| ConfigError::UnknownSheet(name.to_string()))
    }

    /// Resolves the config file path
    ///
    /// Precedence: explicit path (CLI argument), then a per-user config
    /// directory, then the bundled default under `assets/config/`.
    pub fn resolve_path(explicit: Option<PathBuf>) -> PathBuf {
        if let Some(path) = explicit {
            return path;
        }

        if let Some(user_path) = dirs::config_dir().map(|p| p.join("xeen-menu/menu.json")) {
            if user_path.exists() {
                return user_path;
            }
        }

        PathBuf::from("assets/config/menu.json")
    }
}

/// Errors that can occur while loading the menu configuration
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// Config file could not be read (path, cause)
    Io(String, String),

    /// Config file is not valid JSON for a MenuConfig (path, cause)
    Parse(String, String),

    /// A sprite sheet name is not present in the config
    UnknownSheet(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Io(path, cause) => {
                write!(f, "Failed to read config {}: {}", path, cause)
            }
            ConfigError::Parse(path, cause) => {
                write!(f, "Failed to parse config {}: {}", path, cause)
            }
            ConfigError::UnknownSheet(name) => {
                write!(f, "Unknown sprite sheet: {}", name)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for String {
    fn from(error: ConfigError) -> Self {
        error.to_string()
    }
}
