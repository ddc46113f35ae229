//! Service error type and its HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use item_store::ItemStoreError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Result type for request handlers
pub type Result<T> = std::result::Result<T, ItemSrvError>;

/// Service errors
#[derive(Debug, Error)]
pub enum ItemSrvError {
    /// Rejected input; the message is sent to the client verbatim
    #[error("{0}")]
    Validation(String),

    /// No item (or file) matches the request
    #[error("not found")]
    NotFound,

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Anything the client cannot act on; detail stays in the logs
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ItemStoreError> for ItemSrvError {
    fn from(err: ItemStoreError) -> Self {
        match err {
            ItemStoreError::NotFound(_) => ItemSrvError::NotFound,
            ItemStoreError::Validation(msg) => ItemSrvError::Validation(msg),
            ItemStoreError::Database(msg) => ItemSrvError::Internal(msg),
        }
    }
}

/// Client-facing error body: `{"error": "<message>"}`
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ItemSrvError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ItemSrvError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ItemSrvError::NotFound => (StatusCode::NOT_FOUND, "not found".to_string()),
            ItemSrvError::Config(msg) | ItemSrvError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
