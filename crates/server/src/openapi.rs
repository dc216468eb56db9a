use axum::Json;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub message: String, pub error: String }

#[derive(ToSchema)]
pub struct CreateProductDoc { pub name: String, pub description: String, pub price: i32, pub id_user: i32 }

#[derive(ToSchema)]
pub struct UpdateProductDoc {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<i32>,
    pub id_user: Option<i32>,
}

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct RestaurantDoc {
    pub name: String,
    pub address: String,
    pub id_user: i32,
    pub phoneNumber: String,
    pub sendCost: i32,
    pub description: String,
    pub typeFood: String,
    pub minTime: i32,
    pub maxTime: i32,
}

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct UpdateRestaurantDoc {
    pub name: Option<String>,
    pub address: Option<String>,
    pub id_user: Option<i32>,
    pub phoneNumber: Option<String>,
    pub sendCost: Option<i32>,
    pub description: Option<String>,
    pub typeFood: Option<String>,
    pub minTime: Option<i32>,
    pub maxTime: Option<i32>,
}

#[derive(ToSchema)]
pub struct ReviewDoc { pub id_user: i32, pub id_product: i32, pub score: i32, pub review: String }

#[derive(ToSchema)]
pub struct UpdateReviewDoc {
    pub id_user: Option<i32>,
    pub id_product: Option<i32>,
    pub score: Option<i32>,
    pub review: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Product Management API", version = "1.0.0", description = "Products, restaurants and reviews"),
    paths(
        crate::routes::health,
        crate::routes::products::create,
        crate::routes::products::list,
        crate::routes::products::get,
        crate::routes::products::by_name,
        crate::routes::products::update,
        crate::routes::products::delete,
        crate::routes::restaurants::create,
        crate::routes::restaurants::list,
        crate::routes::restaurants::get,
        crate::routes::restaurants::update,
        crate::routes::restaurants::delete,
        crate::routes::reviews::list,
        crate::routes::reviews::get,
        crate::routes::reviews::create,
        crate::routes::reviews::update,
        crate::routes::reviews::delete,
    ),
    components(
        schemas(
            MessageDoc,
            ErrorDoc,
            CreateProductDoc,
            UpdateProductDoc,
            RestaurantDoc,
            UpdateRestaurantDoc,
            ReviewDoc,
            UpdateReviewDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "products"),
        (name = "restaurants"),
        (name = "reviews")
    )
)]
pub struct ApiDoc;

/// Serves the generated OpenAPI document
pub async fn swagger_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
