//! List endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::db::repos::{ListRepo, ListRow};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Create / rename request body
#[derive(Deserialize)]
pub struct ListPayload {
    pub name: String,
}

/// GET /lists - all lists
async fn list_lists(State(state): State<AppState>) -> Result<Json<Vec<ListRow>>, ApiError> {
    let lists = ListRepo::new(&state.pool).list().await?;
    Ok(Json(lists))
}

/// POST /lists - create a list
async fn create_list(
    State(state): State<AppState>,
    Json(req): Json<ListPayload>,
) -> Result<(StatusCode, Json<ListRow>), ApiError> {
    let list = ListRepo::new(&state.pool).create(&req.name).await?;
    Ok((StatusCode::CREATED, Json(list)))
}

/// PUT /lists/{id} - rename a list
async fn update_list(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<ListPayload>,
) -> Result<Json<Value>, ApiError> {
    ListRepo::new(&state.pool).update(id, &req.name).await?;
    Ok(Json(json!({ "message": "List updated" })))
}

/// DELETE /lists/{id} - delete a list (items cascade)
async fn delete_list(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    ListRepo::new(&state.pool).delete(id).await?;
    Ok(Json(json!({ "message": "List deleted" })))
}

/// List routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/lists", get(list_lists).post(create_list))
        .route("/lists/{id}", put(update_list).delete(delete_list))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_row_wire_shape() {
        let row = ListRow {
            id: 3,
            name: "groceries".into(),
        };
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value, json!({ "id": 3, "name": "groceries" }));
    }
}
