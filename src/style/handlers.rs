//! Per-channel handler slots.

use super::InteractorStyle;
use crate::channel::Channel;
use crate::source::EventData;
use std::fmt;
use std::rc::Rc;

/// Callback invoked for one channel. Receives the machine so handlers can
/// drive transitions.
pub type Handler = Rc<dyn Fn(&InteractorStyle, &EventData)>;

/// Table of optional handlers indexed by [`Channel`].
///
/// Empty slots are legal and make dispatch a no-op for that channel.
pub struct HandlerSet {
    slots: [Option<Handler>; Channel::COUNT],
}

impl Default for HandlerSet {
    fn default() -> Self {
        Self::new()
    }
}

impl HandlerSet {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }

    /// Handler for `channel`, cloned out so the table is not borrowed while it runs.
    pub fn get(&self, channel: Channel) -> Option<Handler> {
        self.slots[channel.index()].clone()
    }

    /// Install `handler`, returning the one it replaces.
    pub fn set(&mut self, channel: Channel, handler: Handler) -> Option<Handler> {
        self.slots[channel.index()].replace(handler)
    }

    pub fn contains(&self, channel: Channel) -> bool {
        self.slots[channel.index()].is_some()
    }

    /// Number of populated slots
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for HandlerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let populated: Vec<Channel> = Channel::ALL
            .iter()
            .copied()
            .filter(|c| self.contains(*c))
            .collect();
        f.debug_struct("HandlerSet").field("populated", &populated).finish()
    }
}
