//! Health check endpoint

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}

/// GET /health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "Middleware OK",
        database: "MySQL Cluster",
    })
}

/// Health routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_reports_middleware_ok() {
        let Json(body) = health().await;
        assert_eq!(body.status, "Middleware OK");
        assert_eq!(body.database, "MySQL Cluster");
    }
}
