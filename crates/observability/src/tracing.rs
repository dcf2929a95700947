//! Tracing subscriber initialization.
//!
//! Logs go to stderr so they never interleave with tables rendered on stdout.

use tracing_subscriber::EnvFilter;

use crate::{LogConfig, LogFormat};

/// Install the global subscriber. Later calls are no-ops.
pub fn init(config: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.compact().try_init(),
    };

    if installed.is_ok() {
        ::tracing::debug!(format = ?config.format, "tracing initialized");
    }
}
