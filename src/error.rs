//! Error types.

use thiserror::Error;

/// Errors raised while loading table data.
///
/// Store mutations themselves never fail; only parsing external input can.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The input was not valid JSON for the expected shape.
    #[error("invalid table data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for fallible table operations.
pub type Result<T> = std::result::Result<T, StoreError>;
