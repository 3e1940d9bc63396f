//! Error types for the matching engine.
//!
//! Comparisons themselves never fail; these errors only come out of
//! configuration loading and audit sink setup.

use thiserror::Error;

/// Errors raised outside the comparison hot path.
#[derive(Error, Debug)]
pub enum MatchError {
    /// IO error (config file, audit log)
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON document
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias using [`MatchError`].
pub type Result<T> = std::result::Result<T, MatchError>;
