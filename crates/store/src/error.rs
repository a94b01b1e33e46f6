//! Error types for the storage layer.

use thiserror::Error;

use crate::row::RowError;

/// The primary error type for storage operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Could not obtain a connection from the pool.
    #[error("connection unavailable: {message}")]
    Connection {
        /// Driver/pool error text.
        message: String,
    },

    /// A query or procedure call failed.
    #[error(transparent)]
    Query(#[from] tokio_postgres::Error),

    /// A row could not be mapped into its projection type.
    #[error(transparent)]
    Row(#[from] RowError),
}

impl StoreError {
    /// Wraps a pool acquisition failure.
    pub fn connection(err: impl std::fmt::Display) -> Self {
        StoreError::Connection {
            message: err.to_string(),
        }
    }
}

/// Result type alias for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;
