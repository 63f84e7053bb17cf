use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use record_demo::api::{router, AppState};
use serde_json::{json, Value};
use tower::ServiceExt; // for .oneshot()

fn app() -> Router {
    router(Arc::new(AppState::default()))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_create_and_fetch_user() {
    let app = app();
    let (status, created) = send(
        &app,
        "POST",
        "/api/users",
        Some(json!({
            "username": "testuser",
            "email": "test@example.com",
            "first_name": "Test"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["username"], "testuser");
    assert_eq!(created["first_name"], "Test");
    assert!(created["last_name"].is_null());
    let id = created["id"].as_str().unwrap().to_string();

    let (status, fetched) = send(&app, "GET", &format!("/api/users/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, listed) = send(&app, "GET", "/api/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([created]));
}

#[tokio::test]
async fn test_user_validation_errors() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/users",
        Some(json!({"username": "ab", "email": "bad"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Username must be at least 3 characters long");

    let (status, body) = send(
        &app,
        "POST",
        "/api/users",
        Some(json!({"username": "testuser", "email": "invalid-email"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid email address");

    let (status, body) = send(&app, "POST", "/api/users", Some(json!({"username": "testuser"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid email address");

    let (_, listed) = send(&app, "GET", "/api/users", None).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_unknown_ids_are_404() {
    let app = app();

    let (status, body) = send(&app, "GET", "/api/users/nonexistent", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");

    let (status, body) = send(&app, "GET", "/api/products/nonexistent", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Product not found");
}

#[tokio::test]
async fn test_create_and_fetch_product() {
    let app = app();
    let (status, created) = send(
        &app,
        "POST",
        "/api/products",
        Some(json!({"name": "Test Product", "price": 0, "category": "Test"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["price"], 0.0);
    assert_eq!(created["category"], "Test");
    assert!(created["description"].is_null());

    let id = created["id"].as_str().unwrap();
    let (status, fetched) = send(&app, "GET", &format!("/api/products/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Test Product");
}

#[tokio::test]
async fn test_product_validation_errors() {
    let app = app();

    let (status, body) = send(&app, "POST", "/api/products", Some(json!({"name": "A", "price": -1}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Product name must be at least 2 characters long");

    let (status, body) = send(&app, "POST", "/api/products", Some(json!({"name": "Widget", "price": -0.5}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Product price must be a non-negative number");

    let (status, body) = send(&app, "POST", "/api/products", Some(json!({"name": "Widget"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Product price must be a non-negative number");
}

#[tokio::test]
async fn test_malformed_body_is_400() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/products",
        Some(json!({"name": "Widget", "price": "cheap"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let req = Request::builder()
        .method("POST")
        .uri("/api/users")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
