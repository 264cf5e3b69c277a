//! Event source binding - subscription lifecycle.
//!
//! Binding is all-or-nothing: the subscription table is either empty or
//! holds exactly one live subscription per [`Channel`].

use super::InteractorStyle;
use crate::channel::Channel;
use crate::source::{EventData, EventSource, Subscription};
use std::rc::Rc;
use tracing::debug;

impl InteractorStyle {
    /// Attach the machine to `source`, or detach it with `None`.
    ///
    /// Binding the source that is already bound is a no-op. Otherwise every
    /// live subscription is released in acquisition order before the new
    /// source is subscribed on every channel.
    ///
    /// An active animation request follows the binding: it is cancelled on
    /// the old source and re-requested from the new one. Detaching keeps the
    /// animation flag on so a later bind resumes ticking.
    pub fn bind(&self, source: Option<Rc<dyn EventSource>>) {
        let unchanged = match (self.source.borrow().as_ref(), source.as_ref()) {
            (Some(current), Some(next)) => std::ptr::addr_eq(Rc::as_ptr(current), Rc::as_ptr(next)),
            (None, None) => true,
            _ => false,
        };
        if unchanged {
            return;
        }

        let animating = self.is_animating();
        if animating {
            if let Some(previous) = self.source() {
                previous.cancel_animation(self.requester);
            }
        }

        let released = self.release_subscriptions();
        *self.source.borrow_mut() = source.clone();

        let Some(source) = source else {
            debug!(released, "interactor style detached");
            return;
        };

        let mut subscriptions: Vec<Subscription> = Vec::with_capacity(Channel::COUNT);
        for channel in Channel::ALL {
            let this = self.this.clone();
            let subscription = source.subscribe(
                channel,
                Rc::new(move |data: &EventData| {
                    if let Some(style) = this.upgrade() {
                        style.dispatch(channel, data);
                    }
                }),
            );
            subscriptions.push(subscription);
        }
        *self.subscriptions.borrow_mut() = subscriptions;

        if animating {
            source.request_animation(self.requester);
        }

        debug!(released, subscribed = Channel::COUNT, "interactor style bound");
    }

    /// Detach from the current source. Same as `bind(None)`.
    pub fn unbind(&self) {
        self.bind(None);
    }

    /// Release every live subscription, oldest first. Returns how many were released.
    fn release_subscriptions(&self) -> usize {
        let subscriptions: Vec<Subscription> = self.subscriptions.borrow_mut().drain(..).collect();
        let count = subscriptions.len();
        for subscription in subscriptions {
            subscription.release();
        }
        count
    }
}
