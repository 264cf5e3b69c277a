//! Per-channel callback registry backing `HeadlessInteractor`.

use crate::channel::Channel;
use crate::source::EventCallback;

struct Listener {
    id: u64,
    channel: Channel,
    callback: EventCallback,
}

#[derive(Default)]
pub(super) struct ListenerRegistry {
    listeners: Vec<Listener>,
    next_id: u64,
}

impl ListenerRegistry {
    pub(super) fn add(&mut self, channel: Channel, callback: EventCallback) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.push(Listener { id, channel, callback });
        id
    }

    pub(super) fn remove(&mut self, id: u64) {
        self.listeners.retain(|l| l.id != id);
    }

    pub(super) fn is_live(&self, id: u64) -> bool {
        self.listeners.iter().any(|l| l.id == id)
    }

    /// Callbacks for `channel` in registration order
    pub(super) fn snapshot(&self, channel: Channel) -> Vec<(u64, EventCallback)> {
        self.listeners
            .iter()
            .filter(|l| l.channel == channel)
            .map(|l| (l.id, l.callback.clone()))
            .collect()
    }

    pub(super) fn len(&self) -> usize {
        self.listeners.len()
    }

    pub(super) fn count_for(&self, channel: Channel) -> usize {
        self.listeners.iter().filter(|l| l.channel == channel).count()
    }
}
