//! # Authentication Middleware
//!
//! Axum middleware for bearer token validation.
//!
//! This middleware extracts the token from the `Authorization` header, validates it
//! with the [`TokenIssuer`] held in application state, and injects the
//! [`VerifiedClaims`] into the request extensions.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use lib_web::middleware::mw_auth::require_auth;
//!
//! let app = Router::new()
//!     .route("/protected", get(protected_handler))
//!     .route_layer(axum::middleware::from_fn_with_state(state.clone(), require_auth));
//! ```
//!
//! Handlers can then extract claims using `Extension<VerifiedClaims>`:
//!
//! ```rust,ignore
//! use axum::extract::Extension;
//! use lib_auth::VerifiedClaims;
//!
//! async fn protected_handler(Extension(verified): Extension<VerifiedClaims>) -> String {
//!     format!("Hello, {}!", verified.claims.email)
//! }
//! ```

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use lib_auth::{TokenIssuer, VerifiedClaims};
use lib_core::AppError;
use std::sync::Arc;
use tracing::{debug, warn};

/// Authentication middleware that validates bearer tokens.
///
/// # Behavior
///
/// - **Valid token**: Continues to the handler with `VerifiedClaims` in extensions
/// - **Missing header, wrong scheme, bad signature, expired or malformed token**:
///   `401 Unauthorized` with the same body in every case
pub async fn require_auth(
    State(tokens): State<Arc<TokenIssuer>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(bearer_token)
        .ok_or_else(|| {
            warn!("[AUTH] Missing or malformed Authorization header");
            AppError::Unauthorized
        })?;

    let verified: VerifiedClaims = tokens.validate(token).ok_or(AppError::Unauthorized)?;

    debug!(
        "[AUTH] Authenticated user: {} (id: {})",
        verified.claims.email, verified.claims.user_id
    );

    req.extensions_mut().insert(verified);

    Ok(next.run(req).await)
}

/// Extract the token from a `Bearer <token>` header value (scheme is case-insensitive).
fn bearer_token(header_value: &str) -> Option<&str> {
    let (scheme, token) = header_value.trim().split_once(' ')?;
    let token = token.trim();

    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}
