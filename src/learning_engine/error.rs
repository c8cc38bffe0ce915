//! Error types for the learning engine.

use thiserror::Error;

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for engine operations.
///
/// "No active level" is deliberately absent: progression calls with no
/// current level are silent no-ops, not failures.
#[derive(Debug, Error)]
pub enum Error {
    /// Negative value passed to the bead codec.
    #[error("cannot encode negative value {0} as bead positions")]
    NegativeValue(i64),

    /// Bead key that does not parse as `"{column}-{upper|lower}-{row}"`.
    #[error("malformed bead key: {0:?}")]
    MalformedBeadKey(String),

    /// JSON serialization/deserialization error from a progress store.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failure reported by an external progress store.
    #[error("storage error: {0}")]
    Storage(String),
}
