//! # Authentication Data Transfer Objects
//!
//! Request and response structures for the authentication endpoints.
//!
//! ## Endpoints Using These DTOs
//!
//! - `POST /api/auth/register` - [`RegisterRequest`] -> [`MessageResponse`]
//! - `POST /api/auth/login` - [`LoginRequest`] -> [`TokenResponse`]
//! - `GET /api/auth/me` - bearer token -> [`MeResponse`]
//!
//! Failures on any endpoint are returned as [`ErrorResponse`].
//!
//! ## Login Flow
//!
//! ```text
//! POST /api/auth/login
//! Content-Type: application/json
//!
//! {
//!   "email": "alice@example.com",
//!   "password": "MyPassword123!"
//! }
//! ```
//!
//! Response:
//! ```text
//! {
//!   "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "token_type": "bearer"
//! }
//! ```
//!
//! The token is then sent as `Authorization: Bearer <access_token>`.

use serde::{Deserialize, Serialize};

/// Registration request.
///
/// # Validation Rules (Server-Side)
///
/// - Email must be valid format and not already registered
/// - Password must be at least 8 characters
/// - `full_name` is optional
///
/// # Security Note
///
/// The password is hashed with Argon2 immediately and never stored or logged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Token returned by a successful login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

/// Plain acknowledgement body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Identity carried by a validated bearer token.
///
/// # JSON Example
///
/// ```json
/// {
///   "user_id": 7,
///   "email": "a@b.com",
///   "exp": 1700003600,
///   "expires_at": "2023-11-14T23:13:20+00:00"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MeResponse {
    pub user_id: i64,
    pub email: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Expiration time (RFC 3339)
    pub expires_at: String,
}

/// Standard error response for all API endpoints.
///
/// `code` is the [`AppError`](crate::AppError) variant name, e.g. `"Unauthorized"`.
///
/// # JSON Example
///
/// ```json
/// {
///   "error": "Invalid credentials",
///   "code": "Unauthorized"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}
