#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::{Value, json};
use snaplink::config::{Config, StorageBackend};
use snaplink::infrastructure::persistence::InMemoryUrlRepository;
use snaplink::routes::router;
use snaplink::server::build_state;
use snaplink::state::AppState;
use std::sync::Arc;

pub const BASE_URL: &str = "http://sn.test/";

pub fn test_config() -> Config {
    Config {
        storage_backend: StorageBackend::Memory,
        database_url: None,
        listen_addr: "127.0.0.1:0".to_string(),
        base_url: BASE_URL.to_string(),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
        code_length: 6,
        max_allocation_attempts: 10,
        cors_allowed_origins: vec!["*".to_string()],
        db_max_connections: 1,
        db_connect_timeout: 1,
        db_idle_timeout: 1,
        db_max_lifetime: 1,
    }
}

pub fn create_test_state() -> AppState {
    let repository = Arc::new(InMemoryUrlRepository::new());
    build_state(&test_config(), repository.clone(), repository)
}

pub fn create_test_server() -> TestServer {
    let config = test_config();
    let app = router(create_test_state(), &config.cors_allowed_origins);
    TestServer::new(app).unwrap()
}

pub async fn shorten(server: &TestServer, url: &str, alias: Option<&str>) -> Value {
    let mut body = json!({ "original_url": url });
    if let Some(alias) = alias {
        body["custom_alias"] = json!(alias);
    }

    let response = server.post("/urls/shorten").json(&body).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()
}

pub fn code_of(resource: &Value) -> String {
    resource["short_code"].as_str().unwrap().to_string()
}
