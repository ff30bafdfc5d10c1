use serial_test::serial;

use super::{load_config, Settings};

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.server.host, "127.0.0.1");
    assert_eq!(settings.server.port, 8000);
    assert_eq!(settings.websocket.path, "/ws");
    assert_eq!(settings.websocket.max_payload_bytes, 1024 * 1024);
    assert_eq!(settings.websocket.heartbeat_interval_ms, 30_000);
    assert_eq!(settings.storage.path, "matchcast_db");
}

#[test]
#[serial]
fn test_load_config_falls_back_to_defaults() {
    temp_env::with_vars_unset(["SERVER_HOST", "SERVER_PORT", "WEBSOCKET_PATH"], || {
        let settings = load_config().expect("load_config failed");
        assert_eq!(settings.server.port, 8000);
        assert_eq!(settings.websocket.path, "/ws");
    });
}

#[test]
#[serial]
fn test_environment_overrides_defaults() {
    temp_env::with_vars(
        [
            ("SERVER_PORT", Some("9100")),
            ("WEBSOCKET_PATH", Some("/feed")),
        ],
        || {
            let settings = load_config().expect("load_config failed");
            assert_eq!(settings.server.port, 9100);
            assert_eq!(settings.websocket.path, "/feed");
        },
    );
}
