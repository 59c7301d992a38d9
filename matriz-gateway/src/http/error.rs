//! API error types with IntoResponse
//!
//! One translation layer for every route. Policy: the body echoes the
//! underlying message, except the hospital route, which substitutes a
//! fixed text so driver/connection details never reach that partner's
//! dashboard. The raw error is still logged.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::outbound::UpstreamError;

/// Fixed body for hospital failures; the raw driver error is only logged.
const HOSPITAL_ERROR_MESSAGE: &str = "Error conectando al Hospital (Postgres)";

/// API error type with automatic HTTP status mapping
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Library query failure (500, message echoed)
    #[error("{0}")]
    Database(#[from] DbError),

    /// Proxied backend failure (500, message echoed)
    #[error("{0}")]
    Upstream(#[from] UpstreamError),

    /// Hospital query failure (500, fixed message)
    #[error("{HOSPITAL_ERROR_MESSAGE}")]
    Hospital(#[source] DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Database(e) => {
                tracing::error!("Library database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            Self::Upstream(e) => {
                tracing::error!("Upstream error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            Self::Hospital(e) => {
                tracing::error!("Hospital database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    HOSPITAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        let body = Json(json!({ "error": message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn hospital_error_masks_driver_text() {
        let err = ApiError::Hospital(DbError::Sqlx(sqlx::Error::PoolClosed));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], HOSPITAL_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn library_error_echoes_driver_text() {
        let err = ApiError::Database(DbError::Sqlx(sqlx::Error::PoolClosed));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["error"].as_str().unwrap().contains("pool"));
    }
}
