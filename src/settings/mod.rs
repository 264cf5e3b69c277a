//! Interactor settings persisted as JSON.
//!
//! Missing fields fall back to their defaults, so a settings file only needs
//! to list what it changes.

mod error;

pub use error::*;

use crate::constants::{APP_DIR_NAME, DEFAULT_LOG_FILTER, SETTINGS_FILE_NAME};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractorSettings {
    /// Enables the built-in `r`/`w`/`s`/`v` key commands
    pub key_commands_enabled: bool,
    /// The `r` command also resets the camera clipping range
    pub auto_adjust_camera_clipping_range: bool,
    /// Tracing filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for InteractorSettings {
    fn default() -> Self {
        Self {
            key_commands_enabled: true,
            auto_adjust_camera_clipping_range: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl InteractorSettings {
    pub fn load(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::NotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        let settings = serde_json::from_str(&content)?;
        debug!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    /// Load from the default location, falling back to defaults on any error.
    pub fn load_or_default() -> Self {
        let Some(path) = default_settings_path() else {
            return Self::default();
        };
        match Self::load(&path) {
            Ok(settings) => settings,
            Err(SettingsError::NotFound(_)) => Self::default(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load settings, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> SettingsResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// `<config dir>/interactor-style/settings.json`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
}

/// Like [`default_settings_path`] but as an error when no config dir exists.
pub fn require_settings_path() -> SettingsResult<PathBuf> {
    default_settings_path().ok_or(SettingsError::NoConfigDir)
}
