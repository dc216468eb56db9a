use axum::{
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::errors::msg;

use crate::{extract::NotFoundMessage, openapi, state::ServerState};

pub mod products;
pub mod restaurants;
pub mod reviews;

#[utoipa::path(
    get, path = "/api/products/health", tag = "health",
    responses((status = 200, description = "OK", body = crate::openapi::MessageDoc))
)]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

fn product_routes() -> Router<ServerState> {
    Router::new()
        .route("/createProduct", post(products::create))
        .route("/allProducts", get(products::list))
        .route("/productById/:id", get(products::get))
        .route("/productByName", get(products::by_name))
        .route("/updateProduct/:id", put(products::update))
        .route("/deleteProduct/:id", delete(products::delete))
        .route("/health", get(health))
        .layer(Extension(NotFoundMessage(msg::PRODUCT_NOT_FOUND)))
}

fn restaurant_routes() -> Router<ServerState> {
    Router::new()
        .route("/create", post(restaurants::create))
        .route("/allRestaurants", get(restaurants::list))
        .route("/restaurantById/:id", get(restaurants::get))
        .route("/updateRestaurant/:id", put(restaurants::update))
        .route("/delete/:id", delete(restaurants::delete))
        .layer(Extension(NotFoundMessage(msg::RESTAURANT_NOT_FOUND)))
}

fn review_routes() -> Router<ServerState> {
    Router::new()
        .route("/allReviews", get(reviews::list))
        .route("/reviewById/:id", get(reviews::get))
        .route("/createReview", post(reviews::create))
        .route("/updateReview/:id", put(reviews::update))
        .route("/deleteReview/:id", delete(reviews::delete))
        .layer(Extension(NotFoundMessage(msg::REVIEW_NOT_FOUND)))
}

/// Build the full application router
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    Router::new()
        .nest("/api/products", product_routes())
        .nest("/api/restaurant", restaurant_routes())
        .nest("/api/reviews", review_routes())
        .route("/swagger.json", get(openapi::swagger_json))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
