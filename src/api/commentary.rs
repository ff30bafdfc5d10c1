use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use super::error::ApiError;
use super::matches::ListQuery;
use super::AppState;
use crate::model::{MatchId, NewCommentary};

/// `GET /matches/:id/commentary`.
pub async fn list(
    State(state): State<AppState>,
    Path(match_id): Path<MatchId>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Value>, ApiError> {
    validate_match_id(match_id)?;
    if state.store.get_match(match_id)?.is_none() {
        return Err(ApiError::NotFound("Match not found"));
    }

    let commentary = state.store.list_commentary(match_id, query.limit())?;
    Ok(Json(json!({
        "matchId": match_id,
        "count": commentary.len(),
        "commentary": commentary,
    })))
}

/// `POST /matches/:id/commentary`: validate against an existing match,
/// persist, then fan out to that match's subscribers only.
pub async fn create(
    State(state): State<AppState>,
    Path(match_id): Path<MatchId>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    validate_match_id(match_id)?;
    let body: NewCommentary =
        serde_json::from_value(body).map_err(|e| ApiError::Validation(vec![e.to_string()]))?;
    body.validate().map_err(ApiError::Validation)?;
    if state.store.get_match(match_id)?.is_none() {
        return Err(ApiError::NotFound("Match not found"));
    }

    let entry = state.store.insert_commentary(match_id, body)?;
    state.hub.lock().unwrap().broadcast_commentary(match_id, &entry);

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Commentary created successfully", "commentary": entry })),
    ))
}

fn validate_match_id(match_id: MatchId) -> Result<(), ApiError> {
    if match_id <= 0 {
        return Err(ApiError::Validation(vec![
            "Match ID must be a positive integer".to_string(),
        ]));
    }
    Ok(())
}
