use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use models::restaurant::RestaurantChanges;
use serde_json::{json, Value};
use service::restaurant_service::CreateRestaurantInput;

use crate::{
    errors::JsonApiError,
    extract::{JsonBody, JsonPath},
    state::ServerState,
};

#[utoipa::path(
    post, path = "/api/restaurant/create", tag = "restaurants",
    request_body = crate::openapi::RestaurantDoc,
    responses(
        (status = 201, description = "Restaurante creado"),
        (status = 400, description = "Missing fields", body = crate::openapi::MessageDoc),
        (status = 500, description = "Create failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    JsonBody(input): JsonBody<CreateRestaurantInput>,
) -> Result<(StatusCode, Json<Value>), JsonApiError> {
    let created = state
        .restaurants
        .create(input)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Error al procesar la creacion del restaurante"))?;
    Ok((StatusCode::CREATED, Json(json!({"message": "Restaurante creado", "newRestaurant": created}))))
}

#[utoipa::path(
    get, path = "/api/restaurant/allRestaurants", tag = "restaurants",
    responses(
        (status = 200, description = "Restaurantes"),
        (status = 500, description = "List failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Value>, JsonApiError> {
    let restaurants = state
        .restaurants
        .list()
        .await
        .map_err(|e| JsonApiError::from_service(e, "Error al traer los restaurantes"))?;
    Ok(Json(json!({"message": "Restaurantes", "restaurants": restaurants})))
}

#[utoipa::path(
    get, path = "/api/restaurant/restaurantById/{id}", tag = "restaurants",
    params(("id" = i32, Path, description = "Restaurant id")),
    responses(
        (status = 200, description = "Restaurant record"),
        (status = 404, description = "Restaurante no encontrado", body = crate::openapi::MessageDoc),
        (status = 500, description = "Lookup failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    JsonPath(id): JsonPath<i32>,
) -> Result<Json<models::restaurant::Model>, JsonApiError> {
    state
        .restaurants
        .get(id)
        .await
        .map(Json)
        .map_err(|e| JsonApiError::from_service(e, "Error al obtener el restaurante"))
}

#[utoipa::path(
    put, path = "/api/restaurant/updateRestaurant/{id}", tag = "restaurants",
    params(("id" = i32, Path, description = "Restaurant id")),
    request_body = crate::openapi::UpdateRestaurantDoc,
    responses(
        (status = 200, description = "Restaurante actualizado"),
        (status = 404, description = "Restaurante no encontrado", body = crate::openapi::MessageDoc),
        (status = 500, description = "Update failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    JsonPath(id): JsonPath<i32>,
    JsonBody(changes): JsonBody<RestaurantChanges>,
) -> Result<Json<Value>, JsonApiError> {
    let restaurant = state
        .restaurants
        .update(id, changes)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Error al actualizar el restaurante"))?;
    Ok(Json(json!({"message": "Restaurante actualizado", "restaurant": restaurant})))
}

#[utoipa::path(
    delete, path = "/api/restaurant/delete/{id}", tag = "restaurants",
    params(("id" = i32, Path, description = "Restaurant id")),
    responses(
        (status = 200, description = "Restaurante eliminado correctamente", body = crate::openapi::MessageDoc),
        (status = 404, description = "Restaurante no encontrado", body = crate::openapi::MessageDoc),
        (status = 500, description = "Delete failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    JsonPath(id): JsonPath<i32>,
) -> Result<Json<Value>, JsonApiError> {
    state
        .restaurants
        .delete(id)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Error al eliminar el restaurante"))?;
    Ok(Json(json!({"message": "Restaurante eliminado correctamente"})))
}
