//! Library endpoints - products, users, orders

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::library::{Product, User};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Order request body
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub user_id: i32,
    pub product_id: i32,
}

/// Order response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub status: &'static str,
    pub order_id: u64,
    pub details: OrderRequest,
}

/// GET /api/products - read replica
async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.library.products().await?;
    Ok(Json(products))
}

/// GET /api/users - read replica
async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.library.users().await?;
    Ok(Json(users))
}

/// POST /api/orders - write primary; ids are not validated for existence
async fn create_order(
    State(state): State<AppState>,
    Json(req): Json<OrderRequest>,
) -> Result<Json<OrderResponse>, ApiError> {
    let order_id = state
        .library
        .create_order(req.user_id, req.product_id)
        .await?;

    Ok(Json(OrderResponse {
        status: "Orden creada",
        order_id,
        details: req,
    }))
}

/// Library routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/products", get(list_products))
        .route("/api/users", get(list_users))
        .route("/api/orders", post(create_order))
}
