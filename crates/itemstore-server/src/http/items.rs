//! CRUD handlers for `/items`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::app_state::AppState;
use crate::http::{ApiError, ItemBody, ItemOp};

/// `POST /items`
pub async fn create_item(
    State(state): State<AppState>,
    ItemBody(payload): ItemBody,
) -> Result<Response, ApiError> {
    state
        .items()
        .create(payload)
        .await
        .map_err(ApiError::on(ItemOp::Create))?;
    Ok((StatusCode::CREATED, "Item created successfully").into_response())
}

/// `GET /items/:id`
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let item = state
        .items()
        .fetch(&id)
        .await
        .map_err(ApiError::on(ItemOp::Fetch))?;
    Ok((StatusCode::OK, Json(item)).into_response())
}

/// `PUT /items/:id`
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ItemBody(payload): ItemBody,
) -> Result<Response, ApiError> {
    state
        .items()
        .update(&id, payload)
        .await
        .map_err(ApiError::on(ItemOp::Update))?;
    Ok((StatusCode::OK, "Item updated successfully").into_response())
}

/// `DELETE /items/:id`
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    state
        .items()
        .remove(&id)
        .await
        .map_err(ApiError::on(ItemOp::Delete))?;
    Ok((StatusCode::OK, "Item deleted successfully").into_response())
}
