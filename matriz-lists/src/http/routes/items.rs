//! Item endpoints
//!
//! PUT applies a partial update: only supplied fields are written, and a
//! body with neither field is rejected with 400 before touching the store.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::db::repos::{ItemRepo, ItemRow, ItemUpdate};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Create request body
#[derive(Deserialize)]
pub struct CreateItemRequest {
    pub description: String,
    pub list_id: Option<i32>,
}

/// Optional list filter on GET /items
#[derive(Deserialize)]
pub struct ItemsQuery {
    pub list_id: Option<i32>,
}

/// GET /items?list_id= - all items, filtered when list_id is given
async fn list_items(
    State(state): State<AppState>,
    Query(query): Query<ItemsQuery>,
) -> Result<Json<Vec<ItemRow>>, ApiError> {
    let items = ItemRepo::new(&state.pool).list(query.list_id).await?;
    Ok(Json(items))
}

/// POST /items - create an item (completed defaults to false)
async fn create_item(
    State(state): State<AppState>,
    Json(req): Json<CreateItemRequest>,
) -> Result<(StatusCode, Json<ItemRow>), ApiError> {
    let item = ItemRepo::new(&state.pool)
        .create(&req.description, req.list_id)
        .await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /items/{id} - partial update
async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(update): Json<ItemUpdate>,
) -> Result<Json<Value>, ApiError> {
    if update.is_empty() {
        return Err(ApiError::BadRequest("No fields to update".into()));
    }

    ItemRepo::new(&state.pool).update(id, &update).await?;
    Ok(Json(json!({ "message": "Item updated" })))
}

/// DELETE /items/{id} - delete an item
async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    ItemRepo::new(&state.pool).delete(id).await?;
    Ok(Json(json!({ "message": "Item deleted" })))
}

/// Item routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/{id}", put(update_item).delete(delete_item))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_row_wire_shape() {
        let row = ItemRow {
            id: 9,
            description: "buy milk".into(),
            list_id: Some(1),
            completed: false,
        };
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(
            value,
            json!({ "id": 9, "description": "buy milk", "list_id": 1, "completed": false })
        );
    }

    #[test]
    fn update_body_accepts_partial_fields() {
        let update: ItemUpdate = serde_json::from_str(r#"{"completed": true}"#).unwrap();
        assert_eq!(update.completed, Some(true));
        assert!(update.description.is_none());

        let empty: ItemUpdate = serde_json::from_str("{}").unwrap();
        assert!(empty.is_empty());
    }
}
