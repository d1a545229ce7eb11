//! Store error types.

use thiserror::Error;

/// Errors that can occur when using the session store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to serialize or deserialize a value.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Failed to perform a store operation.
    #[error("Store operation failed: {0}")]
    Store(String),

    /// Key not found.
    #[error("Key not found: {0}")]
    NotFound(String),
}
