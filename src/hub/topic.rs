use std::collections::HashSet;

use crate::client::ConnectionId;

/// The set of connections subscribed to one match.
///
/// A topic with no subscribers must not be kept in the index; the hub deletes
/// it on the last unsubscribe.
#[derive(Debug, Default)]
pub struct Topic {
    pub subscribers: HashSet<ConnectionId>,
}

impl Topic {
    /// Adds a subscriber. Subscribing twice has no effect.
    pub fn subscribe(&mut self, id: ConnectionId) {
        self.subscribers.insert(id);
    }

    /// Removes a subscriber. Unknown ids have no effect.
    pub fn unsubscribe(&mut self, id: &ConnectionId) {
        self.subscribers.remove(id);
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}
