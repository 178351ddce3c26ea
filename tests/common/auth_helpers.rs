//! Authentication test helpers
//!
//! Provides utilities for spinning up the API, creating test users and
//! minting tokens.

use std::sync::Arc;
use std::time::Duration;

use axum::http::{header::AUTHORIZATION, HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use keygate::backend::auth::sessions::SessionIssuer;
use keygate::backend::auth::users::MemoryUserDirectory;
use keygate::backend::routes::create_router;
use keygate::backend::server::state::AppState;
use keygate::shared::AuthConfig;
use serde_json::{json, Value};
use uuid::Uuid;

pub const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";
pub const TEST_PASSWORD: &str = "test_password_123";

/// Server plus a handle on its directory for direct manipulation
pub struct TestApp {
    pub server: TestServer,
    pub directory: Arc<MemoryUserDirectory>,
}

/// Test user credentials
pub struct TestUser {
    pub id: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

pub fn test_config() -> AuthConfig {
    AuthConfig::builder()
        .jwt_secret(TEST_SECRET)
        .bcrypt_cost(4)
        .token_ttl(Duration::from_secs(3600))
        .build()
        .expect("test config is valid")
}

pub fn spawn_app() -> TestApp {
    let directory = Arc::new(MemoryUserDirectory::new());
    let state = AppState::new(&test_config(), directory.clone());
    let server = TestServer::new(create_router(state)).expect("Failed to create test server");
    TestApp { server, directory }
}

/// Issuer sharing the server's secret, for crafting tokens directly
pub fn test_issuer(lifetime: Duration) -> SessionIssuer {
    SessionIssuer::new(TEST_SECRET.as_bytes(), lifetime)
}

pub fn unique_email() -> String {
    format!("test_{}@example.com", Uuid::new_v4())
}

/// Register then log in, returning the user and their token
pub async fn create_test_user(app: &TestApp, email: &str, password: &str) -> TestUser {
    let response = app
        .server
        .post("/api/register")
        .json(&json!({ "email": email, "password": password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let response = app
        .server
        .post("/api/login")
        .json(&json!({ "email": email, "password": password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    TestUser {
        id: body["user"]["id"].as_str().expect("user id").to_string(),
        email: body["user"]["email"].as_str().expect("user email").to_string(),
        password: password.to_string(),
        token: body["token"].as_str().expect("token").to_string(),
    }
}

pub async fn create_unique_test_user(app: &TestApp) -> TestUser {
    create_test_user(app, &unique_email(), TEST_PASSWORD).await
}

/// Create authorization header value
pub fn auth_header(token: &str) -> (HeaderName, HeaderValue) {
    let value = HeaderValue::from_str(&format!("Bearer {}", token)).expect("valid header value");
    (AUTHORIZATION, value)
}
