//! Gate error types.
//!
//! The analysis path itself is total: [`crate::ThreatAnalyzer::analyze`]
//! and [`crate::ThreatAnalyzer::stats`] never return an error. These
//! variants cover the fallible edges of the crate: configuration,
//! signature database loading, and CLI I/O.

use thiserror::Error;

/// Gate errors.
#[derive(Error, Debug)]
pub enum GateError {
    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// Signature database could not be loaded or parsed.
    ///
    /// Only surfaced on the strict (fail-closed) load path; the default
    /// load path fails open to an empty store instead.
    #[error("Signature database error: {0}")]
    SignatureDb(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for gate operations
pub type Result<T> = std::result::Result<T, GateError>;

impl From<toml::de::Error> for GateError {
    fn from(err: toml::de::Error) -> Self {
        GateError::Config(err.to_string())
    }
}
