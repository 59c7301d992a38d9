//! Routes to external applications
//!
//! The purchasing store (app1) is proxied over HTTP and its JSON relayed
//! as-is. The hospital store is queried directly - its failures return a
//! fixed message, never the driver text.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;

use crate::db::hospital::Cita;
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Optional list filter on the items proxy
#[derive(Deserialize)]
pub struct ItemsQuery {
    pub list_id: Option<i32>,
}

/// GET /api/externo/app1/lists - HTTP proxy to the store
async fn app1_lists(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let body = state.purchasing.lists().await?;
    Ok(Json(body))
}

/// GET /api/externo/app1/items?list_id= - HTTP proxy, filter passed through
async fn app1_items(
    State(state): State<AppState>,
    Query(query): Query<ItemsQuery>,
) -> Result<Json<Value>, ApiError> {
    let body = state.purchasing.items(query.list_id).await?;
    Ok(Json(body))
}

/// GET /api/externo/hospital/citas - direct query, newest first
async fn hospital_citas(State(state): State<AppState>) -> Result<Json<Vec<Cita>>, ApiError> {
    let citas = state.hospital.citas().await.map_err(ApiError::Hospital)?;
    Ok(Json(citas))
}

/// External application routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/externo/app1/lists", get(app1_lists))
        .route("/api/externo/app1/items", get(app1_items))
        .route("/api/externo/hospital/citas", get(hospital_citas))
}
