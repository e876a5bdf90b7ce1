//! API error taxonomy and HTTP response mapping.
//!
//! Every failure is converted to a response at the handler boundary; nothing
//! is retried or recovered transparently.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON envelope for error responses and confirmation messages:
/// `{"message": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors surfaced by request handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed request field. Maps to 400.
    #[error("{0}")]
    Validation(String),

    /// No record matched the given identifier. Maps to 404.
    #[error("{0}")]
    NotFound(&'static str),

    /// Store or infrastructure failure. Maps to 500 with the underlying
    /// failure message surfaced in the body.
    #[error(transparent)]
    Database(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, message.clone()),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, (*message).to_string()),
            ApiError::Database(err) => {
                tracing::error!(error = %err, "Store operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{err:#}"))
            }
        };

        (status, Json(MessageBody::new(message))).into_response()
    }
}
