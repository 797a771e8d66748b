// Observer lists for input config notifications

use super::registry::LoadedInputConfig;
use std::fmt;

/// Handle returned by `ConfigDelegate::subscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type ConfigCallback = Box<dyn FnMut(&LoadedInputConfig)>;

/// A list of callbacks notified with a registry entry
#[derive(Default)]
pub struct ConfigDelegate {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, ConfigCallback)>,
}

impl ConfigDelegate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a callback, returning a handle that can later remove it
    pub fn subscribe(&mut self, callback: impl FnMut(&LoadedInputConfig) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns false if the handle was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    /// Notify every subscriber, in subscription order
    pub fn broadcast(&mut self, entry: &LoadedInputConfig) {
        for (_, callback) in &mut self.subscribers {
            callback(entry);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl fmt::Debug for ConfigDelegate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigDelegate")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
