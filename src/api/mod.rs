//! HTTP surface: match and commentary routes plus the websocket mount.

pub mod commentary;
pub mod error;
pub mod matches;

use std::sync::{Arc, Mutex};

use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::config::WebSocketSettings;
use crate::hub::Hub;
use crate::store::MatchStore;
use crate::transport::websocket::ws_handler;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub hub: Arc<Mutex<Hub>>,
    pub store: MatchStore,
    pub websocket: WebSocketSettings,
}

pub fn router(state: AppState) -> Router {
    let ws_path = state.websocket.path.clone();
    Router::new()
        .route("/", get(hello))
        .route("/matches", get(matches::list).post(matches::create))
        .route(
            "/matches/:id/commentary",
            get(commentary::list).post(commentary::create),
        )
        .route(&ws_path, get(ws_handler))
        .with_state(state)
}

async fn hello() -> Json<serde_json::Value> {
    Json(json!({ "message": "matchcast live event feed" }))
}

#[cfg(test)]
mod tests;
