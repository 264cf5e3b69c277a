//! The `InteractorStyle` struct definition, construction and teardown.

use super::handlers::{Handler, HandlerSet};
use super::observers::ObserverRegistry;
use super::state::{AnimationState, InteractionState};
use crate::channel::Channel;
use crate::render::Renderer;
use crate::settings::InteractorSettings;
use crate::source::{AnimationRequester, EventData, EventSource, Subscription};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::trace;

/// Interaction state machine bound to at most one event source.
///
/// Always lives behind an `Rc`: subscriptions hold a weak back-reference so
/// a dropped machine stops receiving events.
pub struct InteractorStyle {
    pub(super) this: Weak<InteractorStyle>,
    pub(super) requester: AnimationRequester,
    pub(super) settings: InteractorSettings,
    pub(super) state: Cell<InteractionState>,
    pub(super) animation: Cell<AnimationState>,
    pub(super) source: RefCell<Option<Rc<dyn EventSource>>>,
    pub(super) subscriptions: RefCell<Vec<Subscription>>,
    pub(super) handlers: RefCell<HandlerSet>,
    pub(super) observers: RefCell<ObserverRegistry>,
    pub(super) current_renderer: RefCell<Option<Rc<dyn Renderer>>>,
}

impl InteractorStyle {
    pub fn new() -> Rc<Self> {
        Self::with_settings(InteractorSettings::default())
    }

    pub fn with_settings(settings: InteractorSettings) -> Rc<Self> {
        let mut handlers = HandlerSet::new();
        handlers.set(
            Channel::Char,
            Rc::new(|style: &InteractorStyle, data: &EventData| style.handle_char(data)),
        );

        Rc::new_cyclic(|this| Self {
            this: this.clone(),
            requester: AnimationRequester::next(),
            settings,
            state: Cell::new(InteractionState::None),
            animation: Cell::new(AnimationState::Off),
            source: RefCell::new(None),
            subscriptions: RefCell::new(Vec::new()),
            handlers: RefCell::new(handlers),
            observers: RefCell::new(ObserverRegistry::default()),
            current_renderer: RefCell::new(None),
        })
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn state(&self) -> InteractionState {
        self.state.get()
    }

    pub fn animation_state(&self) -> AnimationState {
        self.animation.get()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.get().is_on()
    }

    pub fn settings(&self) -> &InteractorSettings {
        &self.settings
    }

    /// Identity used with the source's animation scheduler
    pub fn animation_requester(&self) -> AnimationRequester {
        self.requester
    }

    pub fn source(&self) -> Option<Rc<dyn EventSource>> {
        self.source.borrow().clone()
    }

    pub fn has_source(&self) -> bool {
        self.source.borrow().is_some()
    }

    /// Number of live subscriptions: zero or [`Channel::COUNT`].
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.borrow().len()
    }

    /// Renderer resolved by the most recent [`InteractorStyle::locate_renderer`].
    pub fn current_renderer(&self) -> Option<Rc<dyn Renderer>> {
        self.current_renderer.borrow().clone()
    }

    // ------------------------------------------------------------------------
    // Handlers
    // ------------------------------------------------------------------------

    /// Install the handler for `channel`, replacing any previous one.
    pub fn set_handler<F>(&self, channel: Channel, handler: F)
    where
        F: Fn(&InteractorStyle, &EventData) + 'static,
    {
        let handler: Handler = Rc::new(handler);
        self.handlers.borrow_mut().set(channel, handler);
    }

    pub fn has_handler(&self, channel: Channel) -> bool {
        self.handlers.borrow().contains(channel)
    }

    /// Invoke the handler for `channel` if one is installed.
    pub fn dispatch(&self, channel: Channel, data: &EventData) {
        let handler = self.handlers.borrow().get(channel);
        match handler {
            Some(handler) => {
                trace!(channel = %channel, "dispatch");
                handler(self, data);
            }
            None => trace!(handler = %channel.handler_name(), "no handler installed"),
        }
    }
}

impl Drop for InteractorStyle {
    fn drop(&mut self) {
        for subscription in self.subscriptions.get_mut().drain(..) {
            subscription.release();
        }
        if self.animation.get().is_on() {
            if let Some(source) = self.source.get_mut().as_ref() {
                source.cancel_animation(self.requester);
            }
        }
    }
}

impl fmt::Debug for InteractorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractorStyle")
            .field("state", &self.state.get())
            .field("animation", &self.animation.get())
            .field("bound", &self.has_source())
            .field("subscriptions", &self.subscription_count())
            .field("handlers", &*self.handlers.borrow())
            .finish()
    }
}
