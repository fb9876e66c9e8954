//! Opt-in tracing setup for embedders.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing with optional file output.
///
/// Logging is disabled unless the `CALCPAD_LOG` env var names a log file
/// path. Shells render to the same terminal a stdout subscriber would
/// write to, so nothing is installed by default.
///
/// The filter honors `RUST_LOG`, falling back to `info`.
pub fn init_tracing() {
    let Ok(log_path) = std::env::var("CALCPAD_LOG") else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&log_path) else {
        eprintln!("Warning: failed to create log file: {log_path}");
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
