//! Error types for the reminder API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use store::StoreError;
use thiserror::Error;

/// Errors surfaced to API callers.
///
/// Everything here is a caller-input problem: store validation and
/// lookup failures, or a request body that was missing or empty.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body was absent, undecodable, or an empty object.
    #[error("No data provided")]
    MissingBody,

    /// Validation or lookup failure from the store.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        };

        tracing::debug!(status = %status, error = %self, "Request rejected");

        let body = serde_json::json!({
            "error": self.to_string()
        });

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
