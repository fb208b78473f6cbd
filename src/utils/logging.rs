//! Logging initialization
//!
//! Respects the RUST_LOG environment variable, falls back to the config
//! filter when RUST_LOG is unset, and defaults to "info". Output goes to
//! stderr in the human-readable format with module targets included.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Initialize logging
///
/// `filter` is the config-file filter (e.g. "info", "vanityd=debug");
/// RUST_LOG always takes precedence when set.
pub fn init_logging(filter: Option<&str>) {
    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(filter.unwrap_or("info"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_ansi(std::env::var("NO_COLOR").is_err()),
        )
        .with(env_filter)
        .init();
}

/// Initialize logging from the server configuration
pub fn init_logging_from_config(config: Option<&LoggingConfig>) {
    init_logging(config.and_then(|c| c.filter.as_deref()));
}
