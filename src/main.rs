use std::sync::{Arc, Mutex};
use std::time::Duration;

use matchcast::api::{self, AppState};
use matchcast::config::load_config;
use matchcast::hub::Hub;
use matchcast::store::MatchStore;
use matchcast::transport::heartbeat;
use matchcast::utils::logging;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    logging::init("info");

    let settings = match load_config() {
        Ok(settings) => settings,
        Err(e) => {
            error!("failed to load configuration: {e}");
            return;
        }
    };

    let store = match MatchStore::open(&settings.storage.path) {
        Ok(store) => store,
        Err(e) => {
            error!("failed to open store at {}: {e}", settings.storage.path);
            return;
        }
    };

    let hub = Arc::new(Mutex::new(Hub::new()));
    let heartbeat_period = Duration::from_millis(settings.websocket.heartbeat_interval_ms);
    let app = api::router(AppState {
        hub: hub.clone(),
        store,
        websocket: settings.websocket.clone(),
    });

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("failed to bind {addr}: {e}");
            return;
        }
    };
    info!(
        "listening on http://{addr} (websocket at {})",
        settings.websocket.path
    );

    let monitor = tokio::spawn(heartbeat::run(hub, heartbeat_period));

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("server exited: {e}");
    }

    // The monitor must not keep ticking against a torn-down registry.
    monitor.abort();
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received, exiting gracefully");
}
