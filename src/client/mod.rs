//! Per-connection state records for feed subscribers.
//!
//! A `Connection` is owned by the hub's registry; topics and the heartbeat
//! monitor refer to it by id only.

pub mod connection;

pub use connection::{Connection, ConnectionId};
