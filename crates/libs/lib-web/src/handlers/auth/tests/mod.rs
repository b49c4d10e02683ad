//! # Auth Handler Tests
//!
//! Test suite for authentication handlers (register, login, me).

mod register;

use crate::test_utils::{json_request, read_json, send};
use axum::http::Response;
use axum::body::Body;
use axum::Router;
use lib_core::dto::{LoginRequest, RegisterRequest, TokenResponse};

pub const TEST_EMAIL: &str = "alice@example.com";
pub const TEST_PASSWORD: &str = "TestPassword123!";

pub fn register_body(email: &str, password: &str) -> RegisterRequest {
    RegisterRequest {
        email: email.to_string(),
        password: password.to_string(),
        full_name: None,
    }
}

pub async fn post_register(app: &Router, email: &str, password: &str) -> Response<Body> {
    send(
        app,
        json_request("POST", "/api/auth/register", &register_body(email, password)),
    )
    .await
}

pub async fn post_login(app: &Router, email: &str, password: &str) -> Response<Body> {
    let body = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    send(app, json_request("POST", "/api/auth/login", &body)).await
}

/// Register then login, returning the issued access token.
pub async fn register_and_login(app: &Router) -> String {
    post_register(app, TEST_EMAIL, TEST_PASSWORD).await;
    let response = post_login(app, TEST_EMAIL, TEST_PASSWORD).await;
    let token: TokenResponse = read_json(response).await;
    token.access_token
}
