//! In-memory event source.
//!
//! `HeadlessInteractor` implements [`EventSource`] without a window system.
//! Input is injected with the synthetic helpers (`mouse_move`,
//! `button_press`, `press_key`, ...) and the animation scheduler advances
//! only when [`HeadlessInteractor::tick`] is called.
//!
//! ## Dispatch
//!
//! Callbacks for a channel are snapshotted before delivery and each one is
//! re-checked for liveness right before it runs, so a callback that releases
//! other subscriptions (e.g. by rebinding) stops them immediately.

mod registry;

use registry::ListenerRegistry;

use crate::channel::Channel;
use crate::render::Renderer;
use crate::source::{AnimationRequester, EventCallback, EventData, EventSource, Subscription};
use crate::types::{Modifiers, Position, Viewport};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::trace;

/// Pointer buttons understood by [`HeadlessInteractor::button_press`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

impl MouseButton {
    pub fn press_channel(self) -> Channel {
        match self {
            Self::Left => Channel::LeftButtonPress,
            Self::Middle => Channel::MiddleButtonPress,
            Self::Right => Channel::RightButtonPress,
        }
    }

    pub fn release_channel(self) -> Channel {
        match self {
            Self::Left => Channel::LeftButtonRelease,
            Self::Middle => Channel::MiddleButtonRelease,
            Self::Right => Channel::RightButtonRelease,
        }
    }
}

pub struct HeadlessInteractor {
    listeners: Rc<RefCell<ListenerRegistry>>,
    animation_requests: RefCell<Vec<AnimationRequester>>,
    /// Last known position per pointer index
    positions: RefCell<Vec<Position>>,
    pointer_index: Cell<usize>,
    key_code: Cell<Option<char>>,
    modifiers: Cell<Modifiers>,
    /// Viewports in insertion order; later entries are on top
    viewports: RefCell<Vec<(Viewport, Rc<dyn Renderer>)>>,
    render_count: Cell<usize>,
    frame_count: Cell<u64>,
}

impl Default for HeadlessInteractor {
    fn default() -> Self {
        Self {
            listeners: Rc::new(RefCell::new(ListenerRegistry::default())),
            animation_requests: RefCell::new(Vec::new()),
            positions: RefCell::new(vec![Position::default()]),
            pointer_index: Cell::new(0),
            key_code: Cell::new(None),
            modifiers: Cell::new(Modifiers::default()),
            viewports: RefCell::new(Vec::new()),
            render_count: Cell::new(0),
            frame_count: Cell::new(0),
        }
    }
}

impl HeadlessInteractor {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Register `renderer` as responsible for `viewport`.
    pub fn add_renderer(&self, viewport: Viewport, renderer: Rc<dyn Renderer>) {
        self.viewports.borrow_mut().push((viewport, renderer));
    }

    // ------------------------------------------------------------------------
    // Synthetic input
    // ------------------------------------------------------------------------

    /// Deliver `data` on `channel` after updating pointer and key state from it.
    pub fn emit(&self, channel: Channel, data: EventData) {
        self.record(&data);

        let listeners = self.listeners.borrow().snapshot(channel);
        trace!(channel = %channel, listeners = listeners.len(), "emit");
        for (id, callback) in listeners {
            if !self.listeners.borrow().is_live(id) {
                continue;
            }
            callback(&data);
        }
    }

    pub fn mouse_move(&self, x: f64, y: f64) {
        self.emit(Channel::MouseMove, self.pointer_event(x, y));
    }

    pub fn button_press(&self, button: MouseButton, x: f64, y: f64) {
        self.emit(button.press_channel(), self.pointer_event(x, y));
    }

    pub fn button_release(&self, button: MouseButton, x: f64, y: f64) {
        self.emit(button.release_channel(), self.pointer_event(x, y));
    }

    /// Positive `delta` scrolls forward, negative backward, zero is ignored.
    pub fn wheel(&self, delta: f64) {
        let channel = if delta > 0.0 {
            Channel::MouseWheelForward
        } else if delta < 0.0 {
            Channel::MouseWheelBackward
        } else {
            return;
        };
        let pos = self.event_position(self.pointer_index.get());
        self.emit(channel, self.pointer_event(pos.x, pos.y));
    }

    /// Emit `KeyPress` then `Char` for `key` at the current pointer position.
    pub fn press_key(&self, key: char) {
        let data = self.key_event(key);
        self.emit(Channel::KeyPress, data.clone());
        self.emit(Channel::Char, data);
    }

    pub fn key_up(&self, key: char) {
        self.emit(Channel::KeyUp, self.key_event(key));
    }

    pub fn set_modifiers(&self, modifiers: Modifiers) {
        self.modifiers.set(modifiers);
    }

    /// Move pointer `index` without emitting an event.
    pub fn set_pointer_position(&self, index: usize, position: Position) {
        let mut positions = self.positions.borrow_mut();
        if positions.len() <= index {
            positions.resize(index + 1, Position::default());
        }
        positions[index] = position;
        self.pointer_index.set(index);
    }

    /// Advance the animation scheduler one frame. Emits a single `Animation`
    /// event when at least one requester is registered; returns whether it did.
    pub fn tick(&self) -> bool {
        if self.animation_requests.borrow().is_empty() {
            return false;
        }
        self.frame_count.set(self.frame_count.get() + 1);
        let pos = self.event_position(self.pointer_index.get());
        self.emit(Channel::Animation, self.pointer_event(pos.x, pos.y));
        true
    }

    // ------------------------------------------------------------------------
    // Introspection
    // ------------------------------------------------------------------------

    pub fn subscription_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn subscription_count_for(&self, channel: Channel) -> usize {
        self.listeners.borrow().count_for(channel)
    }

    /// Registered animation requests, duplicates included
    pub fn animation_request_count(&self) -> usize {
        self.animation_requests.borrow().len()
    }

    pub fn is_animating(&self) -> bool {
        !self.animation_requests.borrow().is_empty()
    }

    pub fn render_count(&self) -> usize {
        self.render_count.get()
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count.get()
    }

    // ------------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------------

    fn pointer_event(&self, x: f64, y: f64) -> EventData {
        EventData::at(x, y)
            .with_pointer_index(self.pointer_index.get())
            .with_modifiers(self.modifiers.get())
    }

    fn key_event(&self, key: char) -> EventData {
        let pos = self.event_position(self.pointer_index.get());
        EventData {
            key_code: Some(key),
            ..self.pointer_event(pos.x, pos.y)
        }
    }

    fn record(&self, data: &EventData) {
        self.set_pointer_position(data.pointer_index, data.position);
        if data.key_code.is_some() {
            self.key_code.set(data.key_code);
        }
    }
}

impl EventSource for HeadlessInteractor {
    fn subscribe(&self, channel: Channel, callback: EventCallback) -> Subscription {
        let id = self.listeners.borrow_mut().add(channel, callback);
        let listeners = Rc::downgrade(&self.listeners);
        Subscription::new(channel, move || {
            if let Some(listeners) = listeners.upgrade() {
                listeners.borrow_mut().remove(id);
            }
        })
    }

    fn request_animation(&self, requester: AnimationRequester) {
        trace!(requester = requester.id(), "animation requested");
        self.animation_requests.borrow_mut().push(requester);
    }

    fn cancel_animation(&self, requester: AnimationRequester) {
        trace!(requester = requester.id(), "animation cancelled");
        self.animation_requests.borrow_mut().retain(|r| *r != requester);
    }

    fn event_position(&self, pointer_index: usize) -> Position {
        self.positions
            .borrow()
            .get(pointer_index)
            .copied()
            .unwrap_or_default()
    }

    fn key_code(&self) -> Option<char> {
        self.key_code.get()
    }

    fn pointer_index(&self) -> usize {
        self.pointer_index.get()
    }

    fn find_poked_renderer(&self, x: f64, y: f64) -> Option<Rc<dyn Renderer>> {
        self.viewports
            .borrow()
            .iter()
            .rev()
            .find(|(viewport, _)| viewport.contains(x, y))
            .map(|(_, renderer)| renderer.clone())
    }

    fn render(&self) {
        self.render_count.set(self.render_count.get() + 1);
    }
}
