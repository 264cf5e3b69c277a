//! Crate-wide constants.
//!
//! Centralizes the channel contract version, key bindings and logging
//! defaults so both the state machine and event sources agree on them.

// ============================================================================
// Channel Contract
// ============================================================================

/// Version of the channel list shared with event sources.
///
/// Bump whenever a variant is added to or removed from [`crate::Channel`].
pub const CHANNEL_CONTRACT_VERSION: u32 = 1;

// ============================================================================
// Key Commands
// ============================================================================

/// Resets the camera framing of the renderer under the pointer
pub const KEY_RESET_CAMERA: char = 'r';

/// Switches every actor to wireframe representation
pub const KEY_WIREFRAME: char = 'w';

/// Switches every actor to surface representation
pub const KEY_SURFACE: char = 's';

/// Switches every actor to points representation
pub const KEY_POINTS: char = 'v';

// ============================================================================
// Logging & Settings
// ============================================================================

/// Default tracing filter when neither settings nor `RUST_LOG` provide one
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Settings file name inside the platform config directory
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Application directory name inside the platform config directory
pub const APP_DIR_NAME: &str = "interactor-style";
