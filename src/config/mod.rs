mod settings;

use config::{Config, ConfigError, Environment, File};

use crate::config::settings::PartialSettings;

pub use settings::{ServerSettings, Settings, StorageSettings, WebSocketSettings};

/// Loads the configuration from the default file and environment variables,
/// filling anything unspecified from the built-in defaults.
pub fn load_config() -> Result<Settings, ConfigError> {
    let builder = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(Environment::default().separator("_"));

    let config = builder.build()?;

    // Deserialize what is available, then merge with defaults.
    let partial: PartialSettings = config.try_deserialize()?;
    let default = Settings::default();

    Ok(Settings {
        server: ServerSettings {
            host: partial
                .server
                .as_ref()
                .and_then(|s| s.host.clone())
                .unwrap_or(default.server.host),
            port: partial
                .server
                .as_ref()
                .and_then(|s| s.port)
                .unwrap_or(default.server.port),
        },
        websocket: WebSocketSettings {
            path: partial
                .websocket
                .as_ref()
                .and_then(|w| w.path.clone())
                .unwrap_or(default.websocket.path),
            max_payload_bytes: partial
                .websocket
                .as_ref()
                .and_then(|w| w.max_payload_bytes)
                .unwrap_or(default.websocket.max_payload_bytes),
            heartbeat_interval_ms: partial
                .websocket
                .as_ref()
                .and_then(|w| w.heartbeat_interval_ms)
                .unwrap_or(default.websocket.heartbeat_interval_ms),
        },
        storage: StorageSettings {
            path: partial
                .storage
                .as_ref()
                .and_then(|s| s.path.clone())
                .unwrap_or(default.storage.path),
        },
    })
}

#[cfg(test)]
mod tests;
