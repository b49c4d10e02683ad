//! # Register Tests

use super::*;
use crate::test_utils::{setup_test_db, test_app, test_state};
use axum::http::StatusCode;
use lib_auth::verify_password;
use lib_core::dto::{ErrorResponse, MessageResponse};
use lib_core::model::store::UserRepository;

#[tokio::test]
async fn test_register_success() {
    // Arrange
    let pool = setup_test_db().await;
    let app = test_app(test_state(pool.clone()));

    // Act
    let response = post_register(&app, TEST_EMAIL, TEST_PASSWORD).await;

    // Assert
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: MessageResponse = read_json(response).await;
    assert_eq!(body.message, "User created");

    let user = UserRepository::find_by_email(&pool, TEST_EMAIL)
        .await
        .unwrap()
        .expect("User should be stored");
    assert_ne!(user.password_hash, TEST_PASSWORD);
    assert!(verify_password(TEST_PASSWORD, &user.password_hash));
}

#[tokio::test]
async fn test_register_stores_full_name() {
    let pool = setup_test_db().await;
    let app = test_app(test_state(pool.clone()));

    let mut body = register_body(TEST_EMAIL, TEST_PASSWORD);
    body.full_name = Some("  Alice Liddell ".to_string());

    let response = send(&app, json_request("POST", "/api/auth/register", &body)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let user = UserRepository::find_by_email(&pool, TEST_EMAIL)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.full_name.as_deref(), Some("Alice Liddell"));
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let pool = setup_test_db().await;
    let app = test_app(test_state(pool));

    let first = post_register(&app, TEST_EMAIL, TEST_PASSWORD).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_register(&app, TEST_EMAIL, "AnotherPassword456").await;
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);

    let body: ErrorResponse = read_json(second).await;
    assert_eq!(body.error, "Email already registered");
    assert_eq!(body.code, "InvalidInput");
}

#[tokio::test]
async fn test_register_invalid_email() {
    let pool = setup_test_db().await;
    let app = test_app(test_state(pool));

    for email in ["", "not-an-email", "missing@tld", "@example.com"] {
        let response = post_register(&app, email, TEST_PASSWORD).await;
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "email {email:?} should be rejected"
        );
    }
}

#[tokio::test]
async fn test_register_short_password() {
    let pool = setup_test_db().await;
    let app = test_app(test_state(pool.clone()));

    let response = post_register(&app, TEST_EMAIL, "short").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = read_json(response).await;
    assert_eq!(body.error, "Password must be at least 8 characters");

    assert!(UserRepository::find_by_email(&pool, TEST_EMAIL)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_register_malformed_json() {
    let pool = setup_test_db().await;
    let app = test_app(test_state(pool));

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/auth/register")
        .header("content-type", "application/json")
        .body(Body::from("{\"email\": 42"))
        .unwrap();

    let response = send(&app, request).await;
    assert!(response.status().is_client_error());
}
