//! Core error types.

use thiserror::Error;

use crate::store::StoreError;

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Document store operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),
}
