//! Error types for harvest operations.
//!
//! This module provides the [`HarvestError`] type for all fallible library
//! operations and the [`Result`] convenience type.
//!
//! Mapping a record never fails: missing keys, unknown type codes and odd
//! names all have defined fallbacks. Errors only arise at the edges, when
//! fetching records, loading configuration, or serializing the final graph.

use thiserror::Error;

/// Error type for all harvest library operations.
#[derive(Error, Debug)]
pub enum HarvestError {
    /// A fetched payload could not be interpreted as a work record.
    #[error("Invalid work record: {0}")]
    InvalidRecord(String),

    /// A statement could not be turned into valid RDF (bad IRI, literal
    /// as subject, writer failure).
    #[error("RDF error: {0}")]
    Rdf(String),

    /// Configuration could not be loaded or is inconsistent.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The tracing subscriber could not be installed.
    #[error("Logger error: {0}")]
    Logger(String),

    /// HTTP failure talking to the upstream repository API.
    #[cfg(feature = "figshare-client")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON decoding failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error from the underlying source/destination.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Convenience type alias for [`std::result::Result`] with [`HarvestError`].
pub type Result<T> = std::result::Result<T, HarvestError>;
