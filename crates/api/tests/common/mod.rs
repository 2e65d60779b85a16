//! Shared helpers for HTTP-level integration tests.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the
//! router, no listening socket required. The app is built through
//! [`partstore_api::router::build_app_router`] so tests exercise the
//! same middleware stack (CORS, request ID, timeout, tracing, panic
//! recovery) that production uses.

#![allow(dead_code)] // not every test binary uses every helper

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use partstore_api::auth::jwt::JwtConfig;
use partstore_api::auth::password::hash_password;
use partstore_api::config::ServerConfig;
use partstore_api::router::build_app_router;
use partstore_api::state::AppState;
use partstore_db::models::user::{CreateUser, User};
use partstore_db::repositories::UserRepo;

/// Fixed signing secret shared by the test app and any test that signs
/// tokens by hand.
pub const TEST_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// Build a test `ServerConfig` with safe defaults and the fixed secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
            token_expiry_mins: 60,
        },
    }
}

/// Build the full application router against the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Send a GET request with a Bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body and a Bearer token.
pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a PUT request with a JSON body and a Bearer token.
pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("PUT")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a DELETE request with a Bearer token.
pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixture helpers
// ---------------------------------------------------------------------------

/// Create a user directly in the database and return the row plus the
/// plaintext password used.
pub async fn create_test_user(pool: &PgPool, email: &str, role: &str) -> (User, String) {
    let password = "test_password_123!";
    let hashed = hash_password(password).expect("hashing should succeed");
    let input = CreateUser {
        email: email.to_string(),
        password_hash: hashed,
        name: "Test User".to_string(),
        role: role.to_string(),
    };
    let user = UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed");
    (user, password.to_string())
}

/// Log in via the API and return the bearer token string.
pub async fn login_token(pool: &PgPool, email: &str, password: &str) -> String {
    let app = build_test_app(pool.clone());
    let body = serde_json::json!({ "email": email, "password": password });
    let response = post_json(app, "/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["data"]
        .as_str()
        .expect("login data should be the token string")
        .to_string()
}

/// Create a user and log them in, returning `(user, token)`.
pub async fn auth_user(pool: &PgPool, email: &str, role: &str) -> (User, String) {
    let (user, password) = create_test_user(pool, email, role).await;
    let token = login_token(pool, email, &password).await;
    (user, token)
}
