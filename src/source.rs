//! Event source contract.
//!
//! An event source owns the raw input stream of one interaction area. It
//! hands out one [`Subscription`] per `subscribe` call, schedules animation
//! frames for registered requesters and answers pointer/renderer queries.
//!
//! ## Subscription tokens
//!
//! A [`Subscription`] is a capability: holding it keeps the callback live,
//! releasing it (explicitly or by dropping it) removes the callback from the
//! source synchronously.

use crate::channel::Channel;
use crate::render::Renderer;
use crate::types::{Modifiers, Position};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for animation requester ids
static REQUESTER_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Payload delivered with every event.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventData {
    /// Pointer position at the time of the event
    pub position: Position,
    /// Index of the pointer that produced the event (multi-touch)
    pub pointer_index: usize,
    /// Character for keyboard channels
    pub key_code: Option<char>,
    pub modifiers: Modifiers,
}

impl EventData {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            position: Position::new(x, y),
            ..Self::default()
        }
    }

    pub fn key(key: char) -> Self {
        Self {
            key_code: Some(key),
            ..Self::default()
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_pointer_index(mut self, pointer_index: usize) -> Self {
        self.pointer_index = pointer_index;
        self
    }
}

/// Callback invoked by a source for every event on a subscribed channel.
pub type EventCallback = Rc<dyn Fn(&EventData)>;

/// Live subscription handle returned by [`EventSource::subscribe`].
pub struct Subscription {
    channel: Channel,
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(channel: Channel, release: impl FnOnce() + 'static) -> Self {
        Self {
            channel,
            release: Some(Box::new(release)),
        }
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Stop delivery to the subscribed callback.
    pub fn release(mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("channel", &self.channel)
            .field("live", &self.release.is_some())
            .finish()
    }
}

/// Identity under which a consumer registers with the animation scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnimationRequester(u64);

impl AnimationRequester {
    /// Allocate a fresh, process-unique requester id.
    pub fn next() -> Self {
        Self(REQUESTER_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Raw input provider for one interaction area.
pub trait EventSource {
    /// Register `callback` for every future event on `channel`.
    fn subscribe(&self, channel: Channel, callback: EventCallback) -> Subscription;

    /// Start delivering `Animation` events on every scheduler tick.
    fn request_animation(&self, requester: AnimationRequester);

    /// Withdraw a previous [`EventSource::request_animation`].
    fn cancel_animation(&self, requester: AnimationRequester);

    fn event_position(&self, pointer_index: usize) -> Position;

    /// Character of the most recent key event
    fn key_code(&self) -> Option<char>;

    /// Pointer that produced the most recent event
    fn pointer_index(&self) -> usize;

    /// Renderer whose viewport contains `(x, y)`, if any.
    fn find_poked_renderer(&self, x: f64, y: f64) -> Option<Rc<dyn Renderer>>;

    /// Request a redraw of the rendering surface.
    fn render(&self);
}
