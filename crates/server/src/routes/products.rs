use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use common::types::MessageBody;
use models::product;
use service::product::ProductInput;
use tracing::info;

use crate::errors::JsonApiError;
use crate::routes::ServerState;

pub const DELETED_MSG: &str = "Product deleted successfully";

#[utoipa::path(get, path = "/api/products", tag = "products",
    responses((status = 200, description = "All products", body = [crate::openapi::ProductDoc]), (status = 500, description = "Storage failure", body = crate::openapi::MessageDoc)))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<product::Model>>, JsonApiError> {
    let rows = state
        .catalog
        .list()
        .await
        .map_err(|e| JsonApiError::from_service("list products", e))?;
    info!(count = rows.len(), "list products");
    Ok(Json(rows))
}

#[utoipa::path(post, path = "/api/products", tag = "products", request_body = crate::openapi::ProductInputDoc,
    responses((status = 201, description = "Created", body = crate::openapi::ProductDoc), (status = 400, description = "Validation error", body = crate::openapi::MessageDoc), (status = 500, description = "Storage failure", body = crate::openapi::MessageDoc)))]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> Result<(StatusCode, Json<product::Model>), JsonApiError> {
    let Json(input) = payload?;
    let created = state
        .catalog
        .create(input)
        .await
        .map_err(|e| JsonApiError::from_service("create product", e))?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/api/products/{id}", tag = "products",
    params(("id" = String, Path, description = "Product identifier")),
    responses((status = 200, description = "Product", body = crate::openapi::ProductDoc), (status = 400, description = "Invalid id", body = crate::openapi::MessageDoc), (status = 404, description = "Not found", body = crate::openapi::MessageDoc), (status = 500, description = "Storage failure", body = crate::openapi::MessageDoc)))]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<product::Model>, JsonApiError> {
    state
        .catalog
        .get(&id)
        .await
        .map(Json)
        .map_err(|e| JsonApiError::from_service("get product", e))
}

#[utoipa::path(put, path = "/api/products/{id}", tag = "products", request_body = crate::openapi::ProductInputDoc,
    params(("id" = String, Path, description = "Product identifier")),
    responses((status = 200, description = "Replaced product", body = crate::openapi::ProductDoc), (status = 400, description = "Invalid id or payload", body = crate::openapi::MessageDoc), (status = 404, description = "Not found", body = crate::openapi::MessageDoc), (status = 500, description = "Storage failure", body = crate::openapi::MessageDoc)))]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> Result<Json<product::Model>, JsonApiError> {
    let Json(input) = payload?;
    state
        .catalog
        .update(&id, input)
        .await
        .map(Json)
        .map_err(|e| JsonApiError::from_service("update product", e))
}

#[utoipa::path(delete, path = "/api/products/{id}", tag = "products",
    params(("id" = String, Path, description = "Product identifier")),
    responses((status = 200, description = "Deleted", body = crate::openapi::MessageDoc), (status = 400, description = "Invalid id", body = crate::openapi::MessageDoc), (status = 404, description = "Not found", body = crate::openapi::MessageDoc), (status = 500, description = "Storage failure", body = crate::openapi::MessageDoc)))]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, JsonApiError> {
    state
        .catalog
        .delete(&id)
        .await
        .map_err(|e| JsonApiError::from_service("delete product", e))?;
    Ok(Json(MessageBody::new(DELETED_MSG)))
}
