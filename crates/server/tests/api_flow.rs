use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use migration::MigratorTrait;
use serde_json::{json, Value};
use service::users::mock::StaticUserDirectory;
use tower::Service;

use server::{routes, state::ServerState};

fn cors() -> tower_http::cors::CorsLayer { tower_http::cors::CorsLayer::very_permissive() }

async fn build_app(users: Arc<StaticUserDirectory>) -> anyhow::Result<Router> {
    let db = models::db::connect_in_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(routes::build_router(ServerState::new(db, users), cors()))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&b)?))?,
        None => builder.body(Body::empty())?,
    };
    let res = app.clone().call(req).await?;
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, value))
}

fn pizza() -> Value {
    json!({"name": "Pizza", "description": "Cheese", "price": 10, "id_user": 1})
}

#[tokio::test]
async fn health_and_swagger() -> anyhow::Result<()> {
    let app = build_app(Arc::new(StaticUserDirectory::default())).await?;
    let (status, body) = send(&app, "GET", "/api/products/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "OK");

    let (status, body) = send(&app, "GET", "/swagger.json", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body["openapi"].as_str().unwrap_or_default().starts_with("3."));
    assert!(body["paths"]["/api/reviews/createReview"].is_object());
    Ok(())
}

#[tokio::test]
async fn product_lifecycle() -> anyhow::Result<()> {
    let app = build_app(Arc::new(StaticUserDirectory::default())).await?;

    let (status, body) = send(&app, "POST", "/api/products/createProduct", Some(pizza())).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Producto creado");
    let id = body["newProduct"]["id"].as_i64().unwrap();
    assert!(body["newProduct"]["createdAt"].is_string());

    let (status, body) = send(&app, "GET", &format!("/api/products/productById/{id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Pizza");
    assert_eq!(body["price"], 10);

    let (_, body) = send(&app, "GET", "/api/products/allProducts?name=izz", None).await?;
    assert_eq!(body["message"], "Productos");
    assert_eq!(body["products"].as_array().unwrap().len(), 1);
    let (_, body) = send(&app, "GET", "/api/products/allProducts?name=Burger", None).await?;
    assert!(body["products"].as_array().unwrap().is_empty());

    let (status, body) = send(&app, "GET", "/api/products/productByName?name=Pizza", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["products"]["id"], id);

    let (status, body) = send(&app, "PUT", &format!("/api/products/updateProduct/{id}"), Some(json!({"price": 12}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Producto actualizado");
    assert_eq!(body["product"]["price"], 12);
    assert_eq!(body["product"]["name"], "Pizza");

    let (status, body) = send(&app, "DELETE", &format!("/api/products/deleteProduct/{id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Producto eliminado correctamente");

    let (status, body) = send(&app, "GET", &format!("/api/products/productById/{id}"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Producto no encontrado");
    Ok(())
}

#[tokio::test]
async fn product_validation_errors() -> anyhow::Result<()> {
    let app = build_app(Arc::new(StaticUserDirectory::default())).await?;

    let (status, body) = send(&app, "POST", "/api/products/createProduct",
        Some(json!({"name": "Pizza", "description": "Cheese", "price": -5, "id_user": 1}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"message": "El precio debe ser un número positivo"}));

    let (status, body) = send(&app, "POST", "/api/products/createProduct", Some(json!({"name": "Pizza"}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Todos los campos son obligatorios");

    // wrong JSON type
    let (status, body) = send(&app, "POST", "/api/products/createProduct",
        Some(json!({"name": "Pizza", "description": "Cheese", "price": "diez", "id_user": 1}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());

    let (status, body) = send(&app, "GET", "/api/products/productByName", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "El parámetro 'name' es obligatorio y debe ser una cadena de texto");

    let (status, body) = send(&app, "GET", "/api/products/productByName?name=Nada", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No se encontraron productos con ese nombre");

    let (status, body) = send(&app, "DELETE", "/api/products/deleteProduct/999", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Producto no encontrado");

    let (_, body) = send(&app, "GET", "/api/products/allProducts", None).await?;
    assert!(body["products"].as_array().unwrap().is_empty());
    Ok(())
}

#[tokio::test]
async fn restaurant_lifecycle() -> anyhow::Result<()> {
    let app = build_app(Arc::new(StaticUserDirectory::default())).await?;
    let input = json!({
        "name": "La Esquina", "address": "Calle 1", "id_user": 3,
        "phoneNumber": "555-0101", "sendCost": 2000, "description": "Casera",
        "typeFood": "colombiana", "minTime": 20, "maxTime": 45
    });

    let (status, body) = send(&app, "POST", "/api/restaurant/create", Some(json!({"name": "Solo nombre"}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Todos los campos son obligatorios");

    let (status, body) = send(&app, "POST", "/api/restaurant/create", Some(input)).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Restaurante creado");
    assert_eq!(body["newRestaurant"]["typeFood"], "colombiana");
    let id = body["newRestaurant"]["id"].as_i64().unwrap();

    let (_, body) = send(&app, "GET", "/api/restaurant/allRestaurants", None).await?;
    assert_eq!(body["restaurants"].as_array().unwrap().len(), 1);

    let (status, body) = send(&app, "PUT", &format!("/api/restaurant/updateRestaurant/{id}"), Some(json!({"maxTime": 60}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["restaurant"]["maxTime"], 60);
    assert_eq!(body["restaurant"]["minTime"], 20);

    let (status, _) = send(&app, "DELETE", &format!("/api/restaurant/delete/{id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = send(&app, "GET", &format!("/api/restaurant/restaurantById/{id}"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Restaurante no encontrado");
    Ok(())
}

#[tokio::test]
async fn review_requires_existing_product_and_user() -> anyhow::Result<()> {
    let users = Arc::new(StaticUserDirectory::with_users([12]));
    let app = build_app(users.clone()).await?;

    let (_, body) = send(&app, "POST", "/api/products/createProduct", Some(pizza())).await?;
    let pid = body["newProduct"]["id"].as_i64().unwrap();

    let (status, body) = send(&app, "POST", "/api/reviews/createReview",
        Some(json!({"id_user": 12, "id_product": pid, "score": 4, "review": "Rica"}))).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Review creada");
    let rid = body["review"]["id"].as_i64().unwrap();

    let (status, body) = send(&app, "POST", "/api/reviews/createReview",
        Some(json!({"id_user": 99, "id_product": pid, "score": 4, "review": "Rica"}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Usuario no encontrado");

    // deleted product blocks new reviews before any user lookup
    send(&app, "DELETE", &format!("/api/products/deleteProduct/{pid}"), None).await?;
    let before = users.calls();
    let (status, body) = send(&app, "POST", "/api/reviews/createReview",
        Some(json!({"id_user": 12, "id_product": pid, "score": 5, "review": "Otra"}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Producto no encontrado");
    assert_eq!(users.calls(), before);

    let (_, body) = send(&app, "GET", "/api/reviews/allReviews", None).await?;
    assert_eq!(body["message"], "Reviews");
    assert_eq!(body["reviews"].as_array().unwrap().len(), 1);

    let (status, body) = send(&app, "PUT", &format!("/api/reviews/updateReview/{rid}"), Some(json!({"score": 2}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["review"]["score"], 2);

    let (status, body) = send(&app, "DELETE", &format!("/api/reviews/deleteReview/{rid}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Review eliminada");

    let (status, body) = send(&app, "GET", &format!("/api/reviews/reviewById/{rid}"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Review no encontrada");
    Ok(())
}

#[tokio::test]
async fn review_user_lookup_failure_is_500() -> anyhow::Result<()> {
    let app = build_app(Arc::new(StaticUserDirectory::failing("connection refused"))).await?;
    let (_, body) = send(&app, "POST", "/api/products/createProduct", Some(pizza())).await?;
    let pid = body["newProduct"]["id"].as_i64().unwrap();

    let (status, body) = send(&app, "POST", "/api/reviews/createReview",
        Some(json!({"id_user": 12, "id_product": pid, "score": 4, "review": "Rica"}))).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Error al crear la review");
    assert_eq!(body["error"], "connection refused");

    let (_, body) = send(&app, "GET", "/api/reviews/allReviews", None).await?;
    assert!(body["reviews"].as_array().unwrap().is_empty());
    Ok(())
}

#[tokio::test]
async fn path_ids_answer_with_json_envelope() -> anyhow::Result<()> {
    let app = build_app(Arc::new(StaticUserDirectory::default())).await?;

    // numeric but beyond i32: no record can have it
    let (status, body) = send(&app, "DELETE", "/api/products/deleteProduct/99999999999", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Producto no encontrado"}));

    let (status, body) = send(&app, "PUT", "/api/restaurant/updateRestaurant/99999999999", Some(json!({"name": "x"}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Restaurante no encontrado");

    let (status, body) = send(&app, "GET", "/api/reviews/reviewById/-99999999999", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Review no encontrada");

    // not a number at all
    let (status, body) = send(&app, "GET", "/api/products/productById/abc", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Identificador inválido");
    assert!(body["error"].is_string());
    Ok(())
}

#[tokio::test]
async fn review_missing_fields_follow_the_write_path() -> anyhow::Result<()> {
    let users = Arc::new(StaticUserDirectory::with_users([12]));
    let app = build_app(users.clone()).await?;
    let (_, body) = send(&app, "POST", "/api/products/createProduct", Some(pizza())).await?;
    let pid = body["newProduct"]["id"].as_i64().unwrap();

    let (status, body) = send(&app, "POST", "/api/reviews/createReview",
        Some(json!({"id_user": 12, "score": 4, "review": "x"}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Producto no encontrado"}));
    assert_eq!(users.calls(), 0);

    let (status, body) = send(&app, "POST", "/api/reviews/createReview",
        Some(json!({"id_product": pid, "score": 4, "review": "x"}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Usuario no encontrado"}));
    assert_eq!(users.calls(), 0);

    let (status, body) = send(&app, "POST", "/api/reviews/createReview",
        Some(json!({"id_user": 12, "id_product": pid, "review": "x"}))).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Error al crear la review");
    assert!(body["error"].is_string());

    let (status, body) = send(&app, "POST", "/api/reviews/createReview",
        Some(json!({"id_user": 12, "id_product": pid, "score": 4}))).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Error al crear la review");

    let (_, body) = send(&app, "GET", "/api/reviews/allReviews", None).await?;
    assert!(body["reviews"].as_array().unwrap().is_empty());
    Ok(())
}

#[tokio::test]
async fn product_name_filter_treats_wildcards_literally() -> anyhow::Result<()> {
    let app = build_app(Arc::new(StaticUserDirectory::default())).await?;
    send(&app, "POST", "/api/products/createProduct", Some(pizza())).await?;
    send(&app, "POST", "/api/products/createProduct",
        Some(json!({"name": "Jugo 100% natural", "description": "Fresa", "price": 5, "id_user": 1}))).await?;

    let (_, body) = send(&app, "GET", "/api/products/allProducts?name=%25", None).await?;
    let products = body["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["name"], "Jugo 100% natural");

    let (_, body) = send(&app, "GET", "/api/products/allProducts?name=_", None).await?;
    assert!(body["products"].as_array().unwrap().is_empty());
    Ok(())
}
