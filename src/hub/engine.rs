use std::collections::HashMap;

use axum::extract::ws::Message;
use tracing::debug;

use crate::client::{Connection, ConnectionId};
use crate::hub::envelope::ServerEvent;
use crate::hub::topic::Topic;
use crate::model::{Commentary, Match, MatchId};

/// Shared state of the real-time feed: every open connection plus the topic
/// index mapping match ids to their subscribers.
///
/// All mutation and every fan-out read go through one `Mutex<Hub>`, so topic
/// membership and a connection's own subscription set never diverge.
#[derive(Debug, Default)]
pub struct Hub {
    pub(crate) connections: HashMap<ConnectionId, Connection>,
    pub(crate) topics: HashMap<MatchId, Topic>,
}

impl Hub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a freshly accepted connection to the registry.
    pub fn register(&mut self, conn: Connection) {
        self.connections.insert(conn.id, conn);
    }

    /// Subscribes a connection to a match, creating the topic on first use.
    /// The match is not checked for existence; a topic nobody publishes to
    /// simply never receives events.
    pub fn subscribe(&mut self, match_id: MatchId, conn_id: &ConnectionId) {
        let Some(conn) = self.connections.get_mut(conn_id) else {
            return;
        };
        conn.subscriptions.insert(match_id);
        self.topics.entry(match_id).or_default().subscribe(*conn_id);
    }

    /// Removes a connection from a topic, deleting the topic once its last
    /// subscriber is gone.
    pub fn unsubscribe(&mut self, match_id: MatchId, conn_id: &ConnectionId) {
        if let Some(conn) = self.connections.get_mut(conn_id) {
            conn.subscriptions.remove(&match_id);
        }
        if let Some(topic) = self.topics.get_mut(&match_id) {
            topic.unsubscribe(conn_id);
            if topic.is_empty() {
                self.topics.remove(&match_id);
            }
        }
    }

    /// Marks a connection live again after a pong.
    pub fn mark_alive(&mut self, conn_id: &ConnectionId) {
        if let Some(conn) = self.connections.get_mut(conn_id) {
            conn.alive = true;
        }
    }

    /// Tears a connection down: out of every topic it joined, then out of the
    /// registry. Calling it again after the first time is a no-op, so close,
    /// transport error and heartbeat timeout may all race to it.
    pub fn cleanup(&mut self, conn_id: &ConnectionId) {
        let Some(conn) = self.connections.remove(conn_id) else {
            return;
        };
        for match_id in conn.subscriptions {
            if let Some(topic) = self.topics.get_mut(&match_id) {
                topic.unsubscribe(conn_id);
                if topic.is_empty() {
                    self.topics.remove(&match_id);
                }
            }
        }
        debug!("cleaned up connection {conn_id}");
    }

    /// Sends an event to every open connection.
    pub fn broadcast_all(&self, event: &ServerEvent) {
        let Some(frame) = event.to_frame() else { return };
        for conn in self.connections.values() {
            conn.enqueue(frame.clone());
        }
    }

    /// Sends an event to the subscribers of one match. A match id with no
    /// topic entry is a silent no-op.
    pub fn broadcast_to_topic(&self, match_id: MatchId, event: &ServerEvent) {
        let Some(topic) = self.topics.get(&match_id) else {
            return;
        };
        let Some(frame) = event.to_frame() else { return };
        for conn_id in &topic.subscribers {
            if let Some(conn) = self.connections.get(conn_id) {
                conn.enqueue(frame.clone());
            }
        }
    }

    /// Entry point for the HTTP layer once a match record is written.
    pub fn broadcast_match_created(&self, event: &Match) {
        self.broadcast_all(&ServerEvent::MatchCreated {
            data: event.clone(),
        });
    }

    /// Entry point for the HTTP layer once a commentary record is written.
    pub fn broadcast_commentary(&self, match_id: MatchId, entry: &Commentary) {
        self.broadcast_to_topic(
            match_id,
            &ServerEvent::Commentary {
                data: entry.clone(),
            },
        );
    }

    /// One heartbeat cycle: terminate every connection that missed the last
    /// probe, then demote the rest and ping them. Returns the reaped ids.
    pub fn sweep(&mut self) -> Vec<ConnectionId> {
        let stale: Vec<ConnectionId> = self
            .connections
            .values()
            .filter(|conn| !conn.alive)
            .map(|conn| conn.id)
            .collect();
        for conn_id in &stale {
            if let Some(conn) = self.connections.get(conn_id) {
                conn.enqueue(Message::Close(None));
            }
            self.cleanup(conn_id);
        }
        for conn in self.connections.values_mut() {
            conn.alive = false;
            conn.enqueue(Message::Ping(Vec::new()));
        }
        stale
    }
}
