mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use snaplink::routes::app_router;
use tower::ServiceExt;

#[tokio::test]
async fn test_health_check() {
    let server = common::create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["checks"]["storage"]["status"], "ok");
}

#[tokio::test]
async fn test_index_welcome_message() {
    let server = common::create_test_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["message"],
        "Welcome to the URL Shortener application"
    );
}

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    let app = app_router(common::create_test_state(), &["*".to_string()]);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_cors_headers_present() {
    let server = common::create_test_server();

    let response = server
        .get("/health")
        .add_header("Origin", "https://client.example")
        .await;

    assert_eq!(response.header("access-control-allow-origin"), "*");
}
