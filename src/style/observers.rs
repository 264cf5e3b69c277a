//! Interaction boundary notifications and their observers.

use super::InteractorStyle;
use super::state::InteractionState;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Notification emitted when a manipulation session opens or closes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InteractionEvent {
    #[serde(rename = "StartInteractionEvent")]
    Start { state: InteractionState },
    #[serde(rename = "EndInteractionEvent")]
    End { state: InteractionState },
}

impl InteractionEvent {
    pub fn kind(&self) -> InteractionEventKind {
        match self {
            Self::Start { .. } => InteractionEventKind::Start,
            Self::End { .. } => InteractionEventKind::End,
        }
    }

    /// The session that opened or closed
    pub fn state(&self) -> InteractionState {
        match self {
            Self::Start { state } | Self::End { state } => *state,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InteractionEventKind {
    Start,
    End,
}

/// Handle returned by observer registration, used for removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

pub type Observer = Rc<dyn Fn(&InteractionEvent)>;

#[derive(Default)]
pub(crate) struct ObserverRegistry {
    observers: Vec<(ObserverId, InteractionEventKind, Observer)>,
    next_id: u64,
}

impl ObserverRegistry {
    fn add(&mut self, kind: InteractionEventKind, observer: Observer) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, kind, observer));
        id
    }

    fn remove(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _, _)| *observer_id != id);
        self.observers.len() != before
    }

    fn matching(&self, kind: InteractionEventKind) -> Vec<Observer> {
        self.observers
            .iter()
            .filter(|(_, k, _)| *k == kind)
            .map(|(_, _, observer)| observer.clone())
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.observers.len()
    }
}

impl InteractorStyle {
    /// Observe every `StartInteractionEvent`.
    pub fn on_start_interaction_event<F>(&self, observer: F) -> ObserverId
    where
        F: Fn(&InteractionEvent) + 'static,
    {
        self.observers
            .borrow_mut()
            .add(InteractionEventKind::Start, Rc::new(observer))
    }

    /// Observe every `EndInteractionEvent`.
    pub fn on_end_interaction_event<F>(&self, observer: F) -> ObserverId
    where
        F: Fn(&InteractionEvent) + 'static,
    {
        self.observers
            .borrow_mut()
            .add(InteractionEventKind::End, Rc::new(observer))
    }

    /// Remove an observer. Returns false if it was already gone.
    pub fn remove_observer(&self, id: ObserverId) -> bool {
        self.observers.borrow_mut().remove(id)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }

    /// Deliver `event` synchronously. Observers may call back into the machine.
    pub(crate) fn emit(&self, event: InteractionEvent) {
        let targets = self.observers.borrow().matching(event.kind());
        for observer in targets {
            observer(&event);
        }
    }
}
