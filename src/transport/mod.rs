//! WebSocket transport: connection lifecycle, the inbound subscription
//! protocol and the heartbeat monitor.

pub mod heartbeat;
pub mod message;
pub mod websocket;
