//! Diagnostic logging to stderr
//!
//! `RUST_LOG` wins when set, then `--debug`, otherwise only warnings are shown.

use crate::error::{SortError, SortResult};
use tracing_subscriber::EnvFilter;

const DEFAULT_LEVEL: &str = "warn";

/// Pick the filter for the given `--debug` flag
pub fn filter(debug: bool) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new(DEFAULT_LEVEL)
    }
}

/// Install the global subscriber
pub fn init(debug: bool) -> SortResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(debug))
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .try_init()
        .map_err(|e| SortError::internal(&format!("failed to initialise logging: {e}")))?;

    tracing::debug!(
        app = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        "logging initialised"
    );
    Ok(())
}
