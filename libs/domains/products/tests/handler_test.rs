//! Handler tests for Products domain
//!
//! These run the product router behind the error translator with the
//! in-memory repository, so they need no database:
//! - Request deserialization and validation
//! - HTTP status codes and headers
//! - Problem-details error bodies

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum_helpers::with_error_handling;
use core_config::Environment;
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    let repository = Arc::new(InMemoryProductRepository::new());
    let mediator = product_mediator(repository).unwrap();

    with_error_handling(
        Router::new().nest("/api/products", handlers::router(mediator)),
        Environment::Development,
    )
}

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(body: Body) -> usize {
    body.collect().await.unwrap().to_bytes().len()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn create_widget(app: &Router) -> ProductDto {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/products",
            json!({"name": "Widget", "description": "", "price": 9.99, "stockQuantity": 5}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response.into_body()).await
}

#[tokio::test]
async fn test_create_product_returns_201_with_location() {
    let app = app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/products",
            json!({"name": "Widget", "description": "", "price": 9.99, "stockQuantity": 5}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response.headers()[header::LOCATION].to_str().unwrap().to_string();

    let body: Value = json_body(response.into_body()).await;
    let id = body["id"].as_i64().unwrap();
    assert!(id > 0);
    assert_eq!(location, format!("/api/products/{}", id));
    assert_eq!(body["name"], "Widget");
    assert_eq!(body["description"], "");
    assert_eq!(body["price"], 9.99);
    assert_eq!(body["stockQuantity"], 5);
}

#[tokio::test]
async fn test_create_then_get_round_trips() {
    let app = app();
    let created = create_widget(&app).await;

    let response = app
        .oneshot(empty_request("GET", &format!("/api/products/{}", created.id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let fetched: ProductDto = json_body(response.into_body()).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_with_blank_name_is_validation_problem() {
    let app = app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/products",
            json!({"name": "", "price": 1, "stockQuantity": 0}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/problem+json"
    );

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["status"], 400);
    assert_eq!(body["errors"]["Name"], json!(["Name is required."]));
    assert!(body["errors"].get("Price").is_none());
}

#[tokio::test]
async fn test_create_with_sub_cent_price_is_validation_problem() {
    let app = app();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/products",
            json!({"name": "Widget", "price": 0.001, "stockQuantity": 0}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(
        body["errors"]["Price"],
        json!(["Price must not have more than 2 decimal places."])
    );

    let response = app
        .oneshot(empty_request("GET", "/api/products"))
        .await
        .unwrap();
    let products: Vec<ProductDto> = json_body(response.into_body()).await;
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_create_reports_every_failing_field() {
    let app = app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/products",
            json!({"name": "", "description": "d".repeat(501), "price": 0, "stockQuantity": -1}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    let errors = body["errors"].as_object().unwrap();
    assert_eq!(errors.len(), 4);
    assert_eq!(body["errors"]["StockQuantity"], json!(["StockQuantity must not be negative."]));
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/products")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_unknown_id_is_bare_404() {
    let app = app();

    let response = app.oneshot(empty_request("GET", "/api/products/999")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_bytes(response.into_body()).await, 0);
}

#[tokio::test]
async fn test_non_integer_id_is_bad_request() {
    let app = app();

    let response = app.oneshot(empty_request("GET", "/api/products/abc")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_is_always_200() {
    let app = app();

    let response = app.clone().oneshot(empty_request("GET", "/api/products")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let empty: Vec<ProductDto> = json_body(response.into_body()).await;
    assert!(empty.is_empty());

    create_widget(&app).await;
    create_widget(&app).await;

    let response = app.oneshot(empty_request("GET", "/api/products")).await.unwrap();
    let products: Vec<ProductDto> = json_body(response.into_body()).await;
    assert_eq!(products.len(), 2);
    assert!(products[0].id < products[1].id);
}

#[tokio::test]
async fn test_update_returns_204_and_persists() {
    let app = app();
    let created = create_widget(&app).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/products/{}", created.id),
            json!({
                "id": created.id,
                "name": "Gadget",
                "description": "bigger",
                "price": 12.5,
                "stockQuantity": 0
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(empty_request("GET", &format!("/api/products/{}", created.id)))
        .await
        .unwrap();
    let fetched: Value = json_body(response.into_body()).await;
    assert_eq!(fetched["name"], "Gadget");
    assert_eq!(fetched["description"], "bigger");
    assert_eq!(fetched["price"], 12.5);
    assert_eq!(fetched["stockQuantity"], 0);
}

#[tokio::test]
async fn test_update_with_mismatched_ids_is_bad_request() {
    let app = app();
    let created = create_widget(&app).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/products/{}", created.id),
            json!({"id": created.id + 1, "name": "Gadget", "price": 1, "stockQuantity": 1}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert!(body["detail"].as_str().unwrap().contains("does not match"));

    let response = app
        .oneshot(empty_request("GET", &format!("/api/products/{}", created.id)))
        .await
        .unwrap();
    let unchanged: ProductDto = json_body(response.into_body()).await;
    assert_eq!(unchanged, created);
}

#[tokio::test]
async fn test_update_unknown_product_is_404_problem() {
    let app = app();

    let response = app
        .oneshot(json_request(
            "PUT",
            "/api/products/42",
            json!({"id": 42, "name": "Gadget", "price": 1, "stockQuantity": 1}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["status"], 404);
    assert_eq!(body["detail"], "Product with id 42 was not found");
}

#[tokio::test]
async fn test_update_with_invalid_values_is_validation_problem() {
    let app = app();
    let created = create_widget(&app).await;

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/products/{}", created.id),
            json!({"id": created.id, "name": "Widget", "price": -3, "stockQuantity": 5}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["errors"]["Price"], json!(["Price must be greater than 0."]));
}

#[tokio::test]
async fn test_delete_returns_204_then_404() {
    let app = app();
    let created = create_widget(&app).await;
    let uri = format!("/api/products/{}", created.id);

    let response = app.clone().oneshot(empty_request("DELETE", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.clone().oneshot(empty_request("GET", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(empty_request("DELETE", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/problem+json"
    );
}
