use serde::Deserialize;

/// Top-level configuration for the feed server.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub websocket: WebSocketSettings,
    pub storage: StorageSettings,
}

/// Host and port the HTTP server binds to.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Options recognized by the websocket layer.
#[derive(Debug, Deserialize, Clone)]
pub struct WebSocketSettings {
    /// Mount path for upgrade requests.
    pub path: String,
    /// Per-frame payload ceiling in bytes.
    pub max_payload_bytes: usize,
    /// Liveness probe period.
    pub heartbeat_interval_ms: u64,
}

/// Where the embedded store keeps its data.
#[derive(Debug, Deserialize, Clone)]
pub struct StorageSettings {
    pub path: String,
}

/// Partial configuration loaded from files or environment.
///
/// Allows partial specification; missing values are filled from defaults.
#[derive(Debug, Deserialize)]
pub struct PartialSettings {
    pub server: Option<PartialServerSettings>,
    pub websocket: Option<PartialWebSocketSettings>,
    pub storage: Option<PartialStorageSettings>,
}

#[derive(Debug, Deserialize)]
pub struct PartialServerSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Deserialize)]
pub struct PartialWebSocketSettings {
    pub path: Option<String>,
    pub max_payload_bytes: Option<usize>,
    pub heartbeat_interval_ms: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct PartialStorageSettings {
    pub path: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            websocket: WebSocketSettings::default(),
            storage: StorageSettings::default(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

impl Default for WebSocketSettings {
    fn default() -> Self {
        Self {
            path: "/ws".to_string(),
            max_payload_bytes: 1024 * 1024,
            heartbeat_interval_ms: 30_000,
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            path: "matchcast_db".to_string(),
        }
    }
}
