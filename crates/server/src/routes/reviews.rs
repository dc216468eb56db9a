use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use models::review::ReviewChanges;
use serde_json::{json, Value};
use service::review_service::CreateReviewInput;
use tracing::info;

use crate::{
    errors::JsonApiError,
    extract::{JsonBody, JsonPath},
    state::ServerState,
};

#[utoipa::path(
    get, path = "/api/reviews/allReviews", tag = "reviews",
    responses(
        (status = 200, description = "Reviews"),
        (status = 500, description = "List failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Value>, JsonApiError> {
    let reviews = state
        .reviews
        .list()
        .await
        .map_err(|e| JsonApiError::from_service(e, "Error al traer las reviews"))?;
    Ok(Json(json!({"message": "Reviews", "reviews": reviews})))
}

#[utoipa::path(
    get, path = "/api/reviews/reviewById/{id}", tag = "reviews",
    params(("id" = i32, Path, description = "Review id")),
    responses(
        (status = 200, description = "Review record"),
        (status = 404, description = "Review no encontrada", body = crate::openapi::MessageDoc),
        (status = 500, description = "Lookup failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    JsonPath(id): JsonPath<i32>,
) -> Result<Json<models::review::Model>, JsonApiError> {
    state
        .reviews
        .get(id)
        .await
        .map(Json)
        .map_err(|e| JsonApiError::from_service(e, "Error al obtener la review"))
}

/// Product is checked first, then the user; nothing is written unless both exist.
/// A missing id is reported as that record not being found.
#[utoipa::path(
    post, path = "/api/reviews/createReview", tag = "reviews",
    request_body = crate::openapi::ReviewDoc,
    responses(
        (status = 201, description = "Review creada"),
        (status = 404, description = "Product or user not found", body = crate::openapi::MessageDoc),
        (status = 500, description = "Create failed or user service unreachable", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    JsonBody(input): JsonBody<CreateReviewInput>,
) -> Result<(StatusCode, Json<Value>), JsonApiError> {
    info!(id_product = ?input.id_product, id_user = ?input.id_user, "review_create_request");
    let review = state
        .reviews
        .create(input)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Error al crear la review"))?;
    Ok((StatusCode::CREATED, Json(json!({"message": "Review creada", "review": review}))))
}

#[utoipa::path(
    put, path = "/api/reviews/updateReview/{id}", tag = "reviews",
    params(("id" = i32, Path, description = "Review id")),
    request_body = crate::openapi::UpdateReviewDoc,
    responses(
        (status = 200, description = "Review actualizada"),
        (status = 404, description = "Review, product or user not found", body = crate::openapi::MessageDoc),
        (status = 500, description = "Update failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    JsonPath(id): JsonPath<i32>,
    JsonBody(changes): JsonBody<ReviewChanges>,
) -> Result<Json<Value>, JsonApiError> {
    let review = state
        .reviews
        .update(id, changes)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Error al actualizar la review"))?;
    Ok(Json(json!({"message": "Review actualizada", "review": review})))
}

#[utoipa::path(
    delete, path = "/api/reviews/deleteReview/{id}", tag = "reviews",
    params(("id" = i32, Path, description = "Review id")),
    responses(
        (status = 200, description = "Review eliminada", body = crate::openapi::MessageDoc),
        (status = 404, description = "Review no encontrada", body = crate::openapi::MessageDoc),
        (status = 500, description = "Delete failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    JsonPath(id): JsonPath<i32>,
) -> Result<Json<Value>, JsonApiError> {
    state
        .reviews
        .delete(id)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Error al eliminar la review"))?;
    Ok(Json(json!({"message": "Review eliminada"})))
}
