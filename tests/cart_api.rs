//! Integration tests for the carts REST API
//!
//! These tests drive the full router, including:
//! - The create / get / update / delete lifecycle against the in-memory store
//! - Wire/domain mapping through mocked use cases
//! - Error propagation and status translation
//! - Request validation at the boundary

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`

use cart_api::cart::controller::CartController;
use cart_api::cart::models::{Cart, Product};
use cart_api::cart::ports::{
    CartError, MockCreateCartUseCase, MockDeleteCartUseCase, MockGetCartUseCase,
    MockUpdateCartUseCase,
};
use cart_api::cart::AppState;
use cart_api::router::create_app_router;

/// Helper function to create a test app backed by the in-memory store
fn create_test_app() -> axum::Router {
    create_app_router(Arc::new(AppState::in_memory()))
}

/// Helper function to create a test app around mocked use cases
fn create_mocked_app(
    create: MockCreateCartUseCase,
    get: MockGetCartUseCase,
    update: MockUpdateCartUseCase,
    delete: MockDeleteCartUseCase,
) -> axum::Router {
    let controller = CartController::new(
        Arc::new(create),
        Arc::new(get),
        Arc::new(update),
        Arc::new(delete),
    );
    create_app_router(Arc::new(AppState::new(Arc::new(controller))))
}

/// Helper function to send a request and get the response (REST API)
async fn send_rest_request(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

    (status, body)
}

fn pen_cart() -> Value {
    json!({
        "id": null,
        "products": [{ "id": 1, "description": "Pen", "amount": 2.0 }]
    })
}

#[tokio::test]
async fn test_healthcheck() {
    let app = create_test_app();

    let (status, body) = send_rest_request(&app, "GET", "/healthcheck", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_cart_lifecycle() {
    let app = create_test_app();

    // Create
    let (status, created) = send_rest_request(&app, "POST", "/carts", Some(pen_cart())).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["products"], pen_cart()["products"]);

    // Read
    let (status, fetched) = send_rest_request(&app, "GET", &format!("/carts/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    // Update
    let replacement = json!({
        "id": id,
        "products": [
            { "id": 2, "description": "Ink", "amount": 1.5 },
            { "id": 1, "description": "Pen", "amount": 4.0 }
        ]
    });
    let (status, updated) =
        send_rest_request(&app, "PUT", &format!("/carts/{id}"), Some(replacement.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, replacement);

    // Delete
    let (status, body) = send_rest_request(&app, "DELETE", &format!("/carts/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    // Gone
    let (status, body) = send_rest_request(&app, "GET", &format!("/carts/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
}

#[tokio::test]
async fn test_create_empty_cart() {
    let app = create_test_app();

    let (status, body) =
        send_rest_request(&app, "POST", "/carts", Some(json!({ "products": [] }))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].is_i64());
    assert_eq!(body["products"], json!([]));
}

#[tokio::test]
async fn test_update_uses_path_id() {
    let app = create_test_app();

    let (_, created) = send_rest_request(&app, "POST", "/carts", Some(pen_cart())).await;
    let id = created["id"].as_i64().unwrap();

    let (status, updated) = send_rest_request(
        &app,
        "PUT",
        &format!("/carts/{id}"),
        Some(json!({ "id": 9999, "products": [] })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id);
}

#[tokio::test]
async fn test_missing_cart_operations_return_404() {
    let app = create_test_app();

    let (status, _) = send_rest_request(&app, "GET", "/carts/404", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send_rest_request(&app, "PUT", "/carts/404", Some(pen_cart())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send_rest_request(&app, "DELETE", "/carts/404", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "cart 404 not found");
}

#[tokio::test]
async fn test_invalid_json() {
    let app = create_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/carts")
        .header("content-type", "application/json")
        .body(Body::from("{ invalid json }"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_required_fields() {
    let app = create_test_app();

    let (status, body) = send_rest_request(&app, "POST", "/carts", Some(json!({ "id": 1 }))).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "invalid_request");
}

#[tokio::test]
async fn test_invalid_cart_id() {
    let app = create_test_app();

    let (status, body) = send_rest_request(&app, "DELETE", "/carts/not-a-number", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_request");
}

#[tokio::test]
async fn test_create_maps_use_case_result() {
    let mut create = MockCreateCartUseCase::new();
    create
        .expect_create_cart()
        .once()
        .withf(|cart| *cart == Cart::new(None, vec![Product::new(1, "Pen", 2.0)]))
        .return_once(|_| Ok(Cart::new(Some(42), vec![Product::new(1, "Pen", 2.0)])));

    let app = create_mocked_app(
        create,
        MockGetCartUseCase::new(),
        MockUpdateCartUseCase::new(),
        MockDeleteCartUseCase::new(),
    );

    let (status, body) = send_rest_request(&app, "POST", "/carts", Some(pen_cart())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({
            "id": 42,
            "products": [{ "id": 1, "description": "Pen", "amount": 2.0 }]
        })
    );
}

#[tokio::test]
async fn test_get_maps_empty_cart() {
    let mut get = MockGetCartUseCase::new();
    get.expect_get_cart_by_id()
        .once()
        .withf(|id| *id == 42)
        .return_once(|_| Ok(Cart::new(Some(42), vec![])));

    let app = create_mocked_app(
        MockCreateCartUseCase::new(),
        get,
        MockUpdateCartUseCase::new(),
        MockDeleteCartUseCase::new(),
    );

    let (status, body) = send_rest_request(&app, "GET", "/carts/42", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": 42, "products": [] }));
}

#[tokio::test]
async fn test_use_case_failures_surface_unchanged() {
    let mut update = MockUpdateCartUseCase::new();
    update
        .expect_update_cart()
        .once()
        .return_once(|_, _| Err(CartError::Invalid("cart is checked out".into())));

    let mut delete = MockDeleteCartUseCase::new();
    delete
        .expect_delete_cart()
        .once()
        .return_once(|_| Err(CartError::Internal("store offline".into())));

    let app = create_mocked_app(
        MockCreateCartUseCase::new(),
        MockGetCartUseCase::new(),
        update,
        delete,
    );

    let (status, body) = send_rest_request(&app, "PUT", "/carts/1", Some(pen_cart())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "invalid cart: cart is checked out");

    let (status, body) = send_rest_request(&app, "DELETE", "/carts/1", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "internal_error");
}

#[tokio::test]
async fn test_cors_headers_present() {
    let app = create_test_app();

    let request = Request::builder()
        .method("GET")
        .uri("/healthcheck")
        .header("origin", "http://localhost:3000")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );
}
