//! Error types for the points table

use thiserror::Error;

/// Errors raised by the fallible helpers around the calculator.
///
/// Computing a table never fails; only strict decoding of input and
/// configuration does.
#[derive(Debug, Error)]
pub enum TableError {
    /// Match list could not be decoded.
    #[error("failed to parse matches: {0}")]
    Json(#[from] serde_json::Error),

    /// Points configuration could not be decoded.
    #[error("invalid points config: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type for points table operations.
pub type TableResult<T> = Result<T, TableError>;
