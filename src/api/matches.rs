use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use super::error::ApiError;
use super::AppState;
use crate::model::NewMatch;

pub(crate) const DEFAULT_LIMIT: usize = 50;
pub(crate) const MAX_LIMIT: usize = 100;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<usize>,
}

impl ListQuery {
    pub(crate) fn limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }
}

/// `GET /matches`, newest first.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Value>, ApiError> {
    let events = state.store.list_matches(query.limit())?;
    Ok(Json(json!({ "events": events })))
}

/// `POST /matches`: validate, persist, then fan out `match_created` to
/// every open connection.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    // Decode from Value so type errors report as validation details rather
    // than a body rejection.
    let body: NewMatch =
        serde_json::from_value(body).map_err(|e| ApiError::Validation(vec![e.to_string()]))?;
    body.validate().map_err(ApiError::Validation)?;

    let event = state.store.insert_match(body)?;
    state.hub.lock().unwrap().broadcast_match_created(&event);

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Match created successfully", "event": event })),
    ))
}
