use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::extract::ws::Message;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tempfile::tempdir;
use tokio::sync::mpsc;
use tower::ServiceExt;

use super::{router, AppState};
use crate::client::Connection;
use crate::config::WebSocketSettings;
use crate::hub::Hub;
use crate::store::MatchStore;

fn test_app() -> (Router, Arc<Mutex<Hub>>, tempfile::TempDir) {
    let dir = tempdir().expect("failed to create temp dir");
    let store = MatchStore::open(dir.path().to_str().unwrap()).expect("failed to open store");
    let hub = Arc::new(Mutex::new(Hub::new()));
    let app = router(AppState {
        hub: hub.clone(),
        store,
        websocket: WebSocketSettings::default(),
    });
    (app, hub, dir)
}

fn match_body() -> Value {
    json!({
        "sport": "football",
        "homeTeam": "Arsenal",
        "awayTeam": "Spurs",
        "startTime": "2026-08-01T18:00:00Z",
        "endTime": "2026-08-01T20:00:00Z"
    })
}

fn commentary_body() -> Value {
    json!({
        "minute": 23,
        "sequence": 1,
        "period": "1H",
        "eventType": "goal",
        "actor": "Saka",
        "team": "Arsenal",
        "message": "Curled into the far corner",
        "tags": ["highlight"]
    })
}

fn post(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_hello_route() {
    let (app, _hub, _dir) = test_app();

    let response = app.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_create_match_returns_the_stored_record() {
    let (app, _hub, _dir) = test_app();

    let response = app.oneshot(post("/matches", &match_body())).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Match created successfully");
    assert!(body["event"]["id"].as_i64().unwrap() >= 1);
    assert_eq!(body["event"]["homeScore"], 0);
    assert_eq!(body["event"]["status"], "finished");
}

#[tokio::test]
async fn test_create_match_broadcasts_to_open_connections() {
    let (app, hub, _dir) = test_app();
    let (tx, mut rx) = mpsc::channel(8);
    hub.lock().unwrap().register(Connection::new(tx));

    let response = app.oneshot(post("/matches", &match_body())).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let frame = rx.try_recv().expect("no broadcast reached the connection");
    let Message::Text(text) = frame else {
        panic!("expected a text frame");
    };
    let event: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(event["type"], "match_created");
    assert_eq!(event["data"]["homeTeam"], "Arsenal");
}

#[tokio::test]
async fn test_create_match_validation_failure_lists_details() {
    let (app, _hub, _dir) = test_app();

    let mut body = match_body();
    body["sport"] = json!("");
    body["endTime"] = json!("2026-08-01T17:00:00Z");
    let response = app.oneshot(post("/matches", &body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["details"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_create_match_with_bad_datetime_is_400() {
    let (app, _hub, _dir) = test_app();

    let mut body = match_body();
    body["startTime"] = json!("next tuesday");
    let response = app.oneshot(post("/matches", &body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(!body["details"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_matches_newest_first() {
    let (app, _hub, _dir) = test_app();

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(post("/matches", &match_body()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app.oneshot(get("/matches")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let events = body["events"].as_array().unwrap();
    assert_eq!(events.len(), 2);
    assert!(events[0]["id"].as_i64().unwrap() > events[1]["id"].as_i64().unwrap());
}

#[tokio::test]
async fn test_commentary_for_missing_match_is_404() {
    let (app, _hub, _dir) = test_app();

    let response = app
        .clone()
        .oneshot(post("/matches/999/commentary", &commentary_body()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(get("/matches/999/commentary")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_commentary_roundtrip() {
    let (app, _hub, _dir) = test_app();

    let created = app
        .clone()
        .oneshot(post("/matches", &match_body()))
        .await
        .unwrap();
    let match_id = body_json(created).await["event"]["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(post(
            &format!("/matches/{match_id}/commentary"),
            &commentary_body(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["commentary"]["matchId"], match_id);

    let response = app
        .oneshot(get(&format!("/matches/{match_id}/commentary")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["commentary"][0]["eventType"], "goal");
}

#[tokio::test]
async fn test_commentary_validation_failure() {
    let (app, _hub, _dir) = test_app();

    let created = app
        .clone()
        .oneshot(post("/matches", &match_body()))
        .await
        .unwrap();
    let match_id = body_json(created).await["event"]["id"].as_i64().unwrap();

    let mut body = commentary_body();
    body["message"] = json!("");
    let response = app
        .oneshot(post(&format!("/matches/{match_id}/commentary"), &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_non_positive_match_id_is_rejected() {
    let (app, _hub, _dir) = test_app();

    let response = app.oneshot(get("/matches/0/commentary")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
