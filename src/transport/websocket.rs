use std::sync::{Arc, Mutex};

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::api::AppState;
use crate::client::{Connection, ConnectionId};
use crate::hub::{Hub, ServerEvent};
use crate::transport::message::ClientFrame;

/// Outbound frames queued per connection until the forward task drains them.
const SEND_QUEUE_CAPACITY: usize = 256;

const BAD_FRAME: &str = "invalid message type or missing/invalid matchId";

/// Upgrade handler mounted at the configured websocket path.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.max_message_size(state.websocket.max_payload_bytes)
        .max_frame_size(state.websocket.max_payload_bytes)
        .on_upgrade(move |socket| handle_connection(socket, state.hub.clone()))
}

/// Owns one connection from accept to teardown.
async fn handle_connection(socket: WebSocket, hub: Arc<Mutex<Hub>>) {
    let (mut ws_sender, mut ws_receiver) = socket.split();
    let (tx, mut rx) = mpsc::channel::<Message>(SEND_QUEUE_CAPACITY);

    let conn = Connection::new(tx.clone());
    let conn_id = conn.id;
    {
        let mut hub = hub.lock().unwrap();
        hub.register(conn);
    }
    info!("client connected: {conn_id}");
    reply(&tx, &ServerEvent::Welcome);

    // Forward queued frames until the channel closes or the peer goes away.
    let mut send_task = tokio::spawn(async move {
        while let Some(frame) = rx.recv().await {
            let closing = matches!(frame, Message::Close(_));
            if ws_sender.send(frame).await.is_err() {
                break;
            }
            if closing {
                break;
            }
        }
    });

    let recv_hub = hub.clone();
    let recv_tx = tx.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(next) = ws_receiver.next().await {
            match next {
                Ok(Message::Text(text)) => handle_frame(&recv_hub, &conn_id, &recv_tx, &text),
                // Binary frames go through the same JSON decode path.
                Ok(Message::Binary(raw)) => {
                    handle_frame(&recv_hub, &conn_id, &recv_tx, &String::from_utf8_lossy(&raw))
                }
                Ok(Message::Pong(_)) => recv_hub.lock().unwrap().mark_alive(&conn_id),
                Ok(Message::Close(_)) => break,
                Ok(_) => {}
                Err(e) => {
                    warn!("websocket error on {conn_id}: {e}");
                    break;
                }
            }
        }
    });

    // Whichever half finishes first takes the other down with it.
    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }

    {
        let mut hub = hub.lock().unwrap();
        hub.cleanup(&conn_id);
    }
    info!("client disconnected: {conn_id}");
}

/// Interprets one inbound frame against the hub and answers on the sending
/// connection's own queue. A bad frame earns an `error` reply; the
/// connection stays open.
pub(crate) fn handle_frame(
    hub: &Arc<Mutex<Hub>>,
    conn_id: &ConnectionId,
    tx: &mpsc::Sender<Message>,
    text: &str,
) {
    let frame = match serde_json::from_str::<ClientFrame>(text) {
        Ok(frame) => frame,
        Err(_) => {
            let event = if serde_json::from_str::<serde_json::Value>(text).is_ok() {
                ServerEvent::error(BAD_FRAME)
            } else {
                ServerEvent::error("invalid JSON")
            };
            reply(tx, &event);
            return;
        }
    };

    match frame {
        ClientFrame::Subscribe { match_id } => match match_id.coerce() {
            Some(id) => {
                hub.lock().unwrap().subscribe(id, conn_id);
                debug!("{conn_id} subscribed to match {id}");
                reply(tx, &ServerEvent::Subscribed { match_id: id });
            }
            None => reply(tx, &ServerEvent::error(BAD_FRAME)),
        },
        ClientFrame::Unsubscribe { match_id } => match match_id.coerce() {
            Some(id) => {
                hub.lock().unwrap().unsubscribe(id, conn_id);
                debug!("{conn_id} unsubscribed from match {id}");
                reply(tx, &ServerEvent::Unsubscribed { match_id: id });
            }
            None => reply(tx, &ServerEvent::error(BAD_FRAME)),
        },
    }
}

fn reply(tx: &mpsc::Sender<Message>, event: &ServerEvent) {
    let Some(frame) = event.to_frame() else { return };
    if let Err(e) = tx.try_send(frame) {
        debug!("failed to queue reply: {e}");
    }
}
