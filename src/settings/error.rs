//! Error types for settings operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or saving settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// No platform configuration directory could be determined
    #[error("No config directory available")]
    NoConfigDir,

    /// Settings file is missing
    #[error("Settings file not found: {}", .0.display())]
    NotFound(PathBuf),
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;
