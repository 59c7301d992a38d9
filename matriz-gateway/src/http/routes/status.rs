//! Combined liveness endpoint for the dashboard
//!
//! Probes the three backends independently; one probe failing only flips
//! its own flag. The response is always 200 - partial failure is data
//! here, not an HTTP error.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

/// Liveness flag for one backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendStatus {
    Up,
    Down,
}

impl From<bool> for BackendStatus {
    fn from(up: bool) -> Self {
        if up {
            Self::Up
        } else {
            Self::Down
        }
    }
}

/// System status response
#[derive(Debug, Serialize)]
pub struct SystemStatus {
    pub middleware: BackendStatus,
    pub app1: BackendStatus,
    pub hospital: BackendStatus,
}

/// GET /api/system-status
async fn system_status(State(state): State<AppState>) -> Json<SystemStatus> {
    let middleware = match state.library.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::error!("MySQL middleware error: {}", e);
            false
        }
    };

    let app1 = state.purchasing.probe().await;

    let hospital = match state.hospital.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::error!("Hospital error: {}", e);
            false
        }
    };

    Json(SystemStatus {
        middleware: middleware.into(),
        app1: app1.into(),
        hospital: hospital.into(),
    })
}

/// Status routes
pub fn router() -> Router<AppState> {
    Router::new().route("/api/system-status", get(system_status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_flags_serialize_lowercase() {
        let status = SystemStatus {
            middleware: BackendStatus::Up,
            app1: BackendStatus::Down,
            hospital: BackendStatus::Down,
        };
        let value = serde_json::to_value(&status).unwrap();
        assert_eq!(
            value,
            json!({ "middleware": "up", "app1": "down", "hospital": "down" })
        );
    }
}
