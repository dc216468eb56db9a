use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use service::product_service::CreateProductInput;
use models::product::ProductChanges;
use tracing::info;

use crate::{
    errors::JsonApiError,
    extract::{JsonBody, JsonPath},
    state::ServerState,
};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct NameQuery {
    /// Product name (substring for listing, exact for lookup)
    pub name: Option<String>,
}

#[utoipa::path(
    post, path = "/api/products/createProduct", tag = "products",
    request_body = crate::openapi::CreateProductDoc,
    responses(
        (status = 201, description = "Producto creado"),
        (status = 400, description = "Missing fields or non-positive price", body = crate::openapi::MessageDoc),
        (status = 500, description = "Create failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    JsonBody(input): JsonBody<CreateProductInput>,
) -> Result<(StatusCode, Json<Value>), JsonApiError> {
    let created = state
        .products
        .create(input)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Error al procesar la creacion del producto"))?;
    Ok((StatusCode::CREATED, Json(json!({"message": "Producto creado", "newProduct": created}))))
}

#[utoipa::path(
    get, path = "/api/products/allProducts", tag = "products",
    params(NameQuery),
    responses(
        (status = 200, description = "Productos"),
        (status = 500, description = "List failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    Query(q): Query<NameQuery>,
) -> Result<Json<Value>, JsonApiError> {
    let products = state
        .products
        .list(q.name.as_deref())
        .await
        .map_err(|e| JsonApiError::from_service(e, "Error al traer los productos"))?;
    info!(count = products.len(), "list products");
    Ok(Json(json!({"message": "Productos", "products": products})))
}

#[utoipa::path(
    get, path = "/api/products/productById/{id}", tag = "products",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product record"),
        (status = 404, description = "Producto no encontrado", body = crate::openapi::MessageDoc),
        (status = 500, description = "Lookup failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    JsonPath(id): JsonPath<i32>,
) -> Result<Json<models::product::Model>, JsonApiError> {
    state
        .products
        .get(id)
        .await
        .map(Json)
        .map_err(|e| JsonApiError::from_service(e, "Error al obtener el producto"))
}

#[utoipa::path(
    get, path = "/api/products/productByName", tag = "products",
    params(NameQuery),
    responses(
        (status = 200, description = "Productos"),
        (status = 400, description = "Missing name", body = crate::openapi::MessageDoc),
        (status = 404, description = "No product with that name", body = crate::openapi::MessageDoc),
        (status = 500, description = "Lookup failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn by_name(
    State(state): State<ServerState>,
    Query(q): Query<NameQuery>,
) -> Result<Json<Value>, JsonApiError> {
    let product = state
        .products
        .find_by_name(q.name.as_deref())
        .await
        .map_err(|e| JsonApiError::from_service(e, "Error al buscar productos por nombre"))?;
    Ok(Json(json!({"message": "Productos", "products": product})))
}

#[utoipa::path(
    put, path = "/api/products/updateProduct/{id}", tag = "products",
    params(("id" = i32, Path, description = "Product id")),
    request_body = crate::openapi::UpdateProductDoc,
    responses(
        (status = 200, description = "Producto actualizado"),
        (status = 404, description = "Producto no encontrado", body = crate::openapi::MessageDoc),
        (status = 500, description = "Update failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    JsonPath(id): JsonPath<i32>,
    JsonBody(changes): JsonBody<ProductChanges>,
) -> Result<Json<Value>, JsonApiError> {
    let product = state
        .products
        .update(id, changes)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Error al actualizar el producto"))?;
    Ok(Json(json!({"message": "Producto actualizado", "product": product})))
}

#[utoipa::path(
    delete, path = "/api/products/deleteProduct/{id}", tag = "products",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Producto eliminado correctamente", body = crate::openapi::MessageDoc),
        (status = 404, description = "Producto no encontrado", body = crate::openapi::MessageDoc),
        (status = 500, description = "Delete failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    JsonPath(id): JsonPath<i32>,
) -> Result<Json<Value>, JsonApiError> {
    state
        .products
        .delete(id)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Error al eliminar el producto"))?;
    Ok(Json(json!({"message": "Producto eliminado correctamente"})))
}
