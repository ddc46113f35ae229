//! Item Store Error Types

use thiserror::Error;

/// Result type for item store operations
pub type Result<T> = std::result::Result<T, ItemStoreError>;

/// Item store errors
#[derive(Debug, Error)]
pub enum ItemStoreError {
    /// No item with the given id
    #[error("item not found: {0}")]
    NotFound(i64),

    /// Rejected input; the message is the client-facing reason
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for ItemStoreError {
    fn from(err: sqlx::Error) -> Self {
        ItemStoreError::Database(err.to_string())
    }
}
