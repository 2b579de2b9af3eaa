//! Logging initialisation via tracing-subscriber.
//!
//! Call [`init`] once at startup. The library itself only emits `tracing`
//! events; installing a subscriber is left to the binary.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::error::{HarvestError, Result};

/// Initialise the global tracing subscriber.
///
/// `RUST_LOG` takes precedence when set and valid; otherwise `level`
/// (`"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`) is used.
///
/// # Errors
///
/// Returns [`HarvestError::Logger`] if neither `RUST_LOG` nor `level` parses,
/// or if a global subscriber is already installed.
pub fn init(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| HarvestError::Logger(format!("invalid log level '{level}': {e}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| HarvestError::Logger(format!("failed to set subscriber: {e}")))?;

    Ok(())
}

/// Parse a log level string into a [`LevelFilter`].
///
/// # Errors
///
/// Returns [`HarvestError::Logger`] for empty or unrecognised values.
pub fn parse_level(level: &str) -> Result<LevelFilter> {
    if level.is_empty() {
        return Err(HarvestError::Logger("log level must not be empty".into()));
    }
    level
        .parse::<LevelFilter>()
        .map_err(|_| HarvestError::Logger(format!("unrecognised log level: '{level}'")))
}
