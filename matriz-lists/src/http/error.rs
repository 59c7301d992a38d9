//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Store failures echo the driver message in the body; clients of this
//! service rely on that for surfacing constraint violations.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;

/// API error type with automatic HTTP status mapping
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request rejected before touching the store (400)
    #[error("{0}")]
    BadRequest(String),

    /// Store failure (500, message echoed)
    #[error("{0}")]
    Database(#[from] DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::Database(e) => {
                tracing::error!("Database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };

        let body = Json(json!({ "error": message }));
        (status, body).into_response()
    }
}
