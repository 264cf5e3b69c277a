//! # interactor-style
//!
//! Interaction layer for 3D scene viewers: turns a raw stream of pointer,
//! keyboard, timer, gesture and 3D-controller events into named
//! manipulation sessions and governs when "interaction started/ended"
//! notifications fire relative to an independent animation loop.
//!
//! ## Modules
//!
//! - [`channel`] - The versioned list of input channels
//! - [`source`] - Event source contract and subscription tokens
//! - [`render`] - Renderer and actor contracts
//! - [`style`] - The interaction state machine
//! - [`headless`] - In-memory event source for tests and scripted demos
//! - [`scene`] - Minimal renderer/actor implementations
//! - [`settings`] - JSON settings
//! - [`logging`] - Tracing subscriber setup

pub mod channel;
pub mod constants;
pub mod headless;
pub mod logging;
pub mod render;
pub mod scene;
pub mod settings;
pub mod source;
pub mod style;
pub mod types;

pub use channel::Channel;
pub use constants::CHANNEL_CONTRACT_VERSION;
pub use headless::{HeadlessInteractor, MouseButton};
pub use render::{Actor, Renderer};
pub use scene::{SceneActor, SceneRenderer};
pub use settings::{InteractorSettings, SettingsError, SettingsResult};
pub use source::{AnimationRequester, EventCallback, EventData, EventSource, Subscription};
pub use style::{
    AnimationState, Handler, HandlerSet, InteractionEvent, InteractionEventKind, InteractionState,
    InteractorStyle, KeyCommand, Observer, ObserverId,
};
pub use types::{Modifiers, Position, Representation, Viewport};
