/// Initialize tracing output for the server.
///
/// The level comes from `MATCHCAST_LOG` when set, otherwise from the given
/// default.
pub fn init(default_level: &str) {
    let configured =
        std::env::var("MATCHCAST_LOG").unwrap_or_else(|_| default_level.to_string());
    let level = match configured.to_lowercase().as_str() {
        "error" => tracing::Level::ERROR,
        "warn" | "warning" => tracing::Level::WARN,
        "debug" => tracing::Level::DEBUG,
        "trace" => tracing::Level::TRACE,
        _ => tracing::Level::INFO,
    };

    // try_init so tests and libraries can call this repeatedly without panicking
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init();
}
