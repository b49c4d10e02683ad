//! Shared fixtures for handler tests.

use crate::server::{create_router, AppState};
use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use lib_core::model::store::run_migrations;
use lib_core::{Config, DbPool};
use serde::{de::DeserializeOwned, Serialize};
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test-secret-key-must-be-at-least-32-characters-long!";

/// Setup test database with the real schema.
///
/// A single connection keeps every query on the same in-memory database.
pub async fn setup_test_db() -> DbPool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    run_migrations(&pool, concat!(env!("CARGO_MANIFEST_DIR"), "/../../../migrations"))
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create test config
pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        secret_key: TEST_SECRET.to_string(),
        token_ttl_minutes: 60,
    }
}

pub fn test_state(pool: DbPool) -> AppState {
    AppState::new(pool, test_config()).expect("Test state should build")
}

/// Create test app with the production router
pub fn test_app(state: AppState) -> Router {
    create_router(state, &["http://localhost:3000".to_string()])
}

pub fn json_request(method: &str, uri: &str, body: &impl Serialize) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

pub fn get_request(uri: &str, bearer: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn read_json<T: DeserializeOwned>(response: Response<Body>) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
