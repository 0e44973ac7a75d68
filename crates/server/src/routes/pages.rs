use axum::{
    extract::{Path, State},
    response::Html,
};

use crate::errors::PageError;
use crate::page::render_product_page;
use crate::routes::ServerState;

#[utoipa::path(get, path = "/product/{id}", tag = "pages",
    params(("id" = String, Path, description = "Product identifier")),
    responses((status = 200, description = "HTML detail page", body = String, content_type = "text/html"), (status = 400, description = "Invalid id"), (status = 404, description = "Not found"), (status = 500, description = "Storage failure")))]
pub async fn product_page(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Html<String>, PageError> {
    let p = state
        .catalog
        .get(&id)
        .await
        .map_err(|e| PageError::from_service("render product page", e))?;
    Ok(Html(render_product_page(&p)))
}
