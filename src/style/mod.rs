//! Interaction state machine for camera and actor manipulation.
//!
//! Translates a raw input stream into named manipulation sessions (rotate,
//! pan, zoom, ...) and decides when "interaction started/ended"
//! notifications fire relative to an independent animation loop.
//!
//! ## Architecture
//!
//! The machine tracks two independent values: the current
//! [`InteractionState`] and an [`AnimationState`] flag. Handlers installed per
//! [`crate::Channel`] drive the state through guarded start/end operations.
//!
//! ## Modules
//!
//! - `state` - Interaction and animation state enums
//! - `interactor` - The `InteractorStyle` struct, construction and teardown
//! - `binding` - Event source binding and subscription lifecycle
//! - `transitions` - Start/stop operations and the animation toggle
//! - `observers` - Start/end interaction notifications
//! - `handlers` - Per-channel handler table
//! - `key_commands` - Default keyboard commands and renderer lookup

mod binding;
mod handlers;
mod interactor;
mod key_commands;
mod observers;
mod state;
mod transitions;

pub use handlers::{Handler, HandlerSet};
pub use interactor::InteractorStyle;
pub use key_commands::KeyCommand;
pub use observers::{InteractionEvent, InteractionEventKind, Observer, ObserverId};
pub use state::{AnimationState, InteractionState};
