//! Tracing initialization.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize tracing for embedding applications. Safe to call multiple times.
///
/// Respects `RUST_LOG`; defaults to `info`. The matching pipeline emits a
/// warning when a neighborhood cannot be resolved and debug-level detail on
/// candidate filtering.
pub fn init() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        if let Err(e) = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_target(true)
            .compact()
            .with_writer(std::io::stderr)
            .try_init()
        {
            eprintln!("Failed to initialize tracing: {}", e);
        }
    });
}
