// src/utils/logging.rs
use tracing_subscriber::{fmt, EnvFilter};

/// Directive applied when `RUST_LOG` is absent. The PDF stack is chatty at
/// debug level, so it stays at `warn` unless asked for explicitly.
fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("{},lopdf=warn,pdf_extract=warn", level)
}

/// Installs the global `tracing` subscriber.
/// `RUST_LOG` wins when set; otherwise `verbose` picks debug over info.
pub fn setup_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    tracing::debug!("Logging setup complete.");
}
