use std::collections::HashSet;

use axum::extract::ws::Message;
use tokio::sync::mpsc;
use tracing::debug;
use uuid::Uuid;

use crate::model::MatchId;

/// Identifies one open connection for the lifetime of its socket.
pub type ConnectionId = Uuid;

/// A connected feed subscriber.
///
/// `alive` is the heartbeat flag: cleared just before each probe, set again
/// when the pong comes back. `subscriptions` mirrors the hub's topic index
/// so teardown only has to visit the topics this connection joined.
#[derive(Debug)]
pub struct Connection {
    pub id: ConnectionId,
    pub sender: mpsc::Sender<Message>,
    pub alive: bool,
    pub subscriptions: HashSet<MatchId>,
}

impl Connection {
    pub fn new(sender: mpsc::Sender<Message>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            alive: true,
            subscriptions: HashSet::new(),
        }
    }

    /// Non-blocking send; a closed channel or full queue drops the frame for
    /// this recipient only.
    pub fn enqueue(&self, frame: Message) {
        if self.sender.is_closed() {
            return;
        }
        if let Err(e) = self.sender.try_send(frame) {
            debug!("dropping frame for {}: {e}", self.id);
        }
    }
}
