//! # Authentication Handlers
//!
//! HTTP request handlers for user authentication endpoints.
//!
//! ## Overview
//!
//! - Registration with email/password (password hashed with Argon2)
//! - Login with email/password, answered with an HS256 bearer token
//! - `me`, returning the identity carried by a validated token
//!
//! An unknown email and a wrong password produce the same `401` response.

use lib_auth::{hash_password, verify_password, Claims, TokenIssuer, VerifiedClaims};
use lib_core::{
    dto::{LoginRequest, MeResponse, MessageResponse, RegisterRequest, TokenResponse},
    model::store::{UserForCreate, UserRepository},
    AppError, DbPool,
};
use lib_utils::{format_time, from_unix_timestamp, validate_email, validate_min_length};
use axum::{
    extract::{Extension, Json, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Minimum accepted password length at registration.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Register handler - creates a new user account.
///
/// # Returns
///
/// * `201 Created` with `{"message": "User created"}`
/// * `400 Bad Request` - invalid email, short password, or email already registered
///
/// # Validation
///
/// - Email must be valid and not yet registered
/// - Password must be at least 8 characters
#[instrument(skip_all, fields(email = %req.email))]
pub async fn register(
    State(pool): State<DbPool>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    info!("[REGISTER] New registration request");

    let email = req.email.trim().to_string();

    if let Err(e) = validate_email(&email)
        .and_then(|_| validate_min_length(&req.password, MIN_PASSWORD_LEN, "Password"))
    {
        warn!("[REGISTER] Validation failed: {}", e);
        return Err(AppError::InvalidInput(e));
    }

    if UserRepository::find_by_email(&pool, &email).await?.is_some() {
        warn!("[REGISTER] Email already registered");
        return Err(AppError::InvalidInput("Email already registered".to_string()));
    }

    debug!("[REGISTER] Hashing password...");
    let password_hash = hash_password(&req.password).map_err(|e| {
        warn!("[REGISTER] Password hashing failed: {}", e);
        AppError::InvalidInput(e.to_string())
    })?;

    let full_name = req
        .full_name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty());

    let user_data = UserForCreate::new(email, password_hash, full_name);

    let user = match UserRepository::create(&pool, &user_data).await {
        Ok(user) => user,
        // Lost a race with a concurrent registration for the same email
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            warn!("[REGISTER] Email already registered");
            return Err(AppError::InvalidInput("Email already registered".to_string()));
        }
        Err(e) => {
            error!("[REGISTER] Failed to create user: {}", e);
            return Err(e.into());
        }
    };

    info!("[REGISTER] User created (id: {})", user.id);

    Ok((StatusCode::CREATED, Json(MessageResponse::new("User created"))))
}

/// Login handler - authenticates an existing user.
///
/// # Returns
///
/// * `200 OK` with `{"access_token": "...", "token_type": "bearer"}`
/// * `401 Unauthorized` - unknown email or wrong password
#[instrument(skip_all, fields(email = %req.email))]
pub async fn login(
    State(pool): State<DbPool>,
    State(tokens): State<Arc<TokenIssuer>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    info!("[LOGIN] Login attempt");

    let user = match UserRepository::find_by_email(&pool, req.email.trim()).await? {
        Some(user) => user,
        None => {
            warn!("[LOGIN] Unknown email");
            return Err(AppError::Unauthorized);
        }
    };

    debug!("[LOGIN] Verifying password...");
    if !verify_password(&req.password, &user.password_hash) {
        warn!("[LOGIN] Invalid password for user id {}", user.id);
        return Err(AppError::Unauthorized);
    }

    debug!("[LOGIN] Issuing token...");
    let token = tokens
        .issue(&Claims::new(user.id, user.email.clone()))
        .map_err(|e| {
            error!("[LOGIN] Token issuance failed: {}", e);
            AppError::Internal(e.to_string())
        })?;

    info!("[LOGIN] User authenticated (id: {})", user.id);

    Ok(Json(TokenResponse::bearer(token)))
}

/// Identity of the caller, taken from the token validated by `require_auth`.
pub async fn me(Extension(verified): Extension<VerifiedClaims>) -> Json<MeResponse> {
    let expires_at = from_unix_timestamp(verified.exp)
        .map(format_time)
        .unwrap_or_default();

    Json(MeResponse {
        user_id: verified.claims.user_id,
        email: verified.claims.email,
        exp: verified.exp,
        expires_at,
    })
}

#[cfg(test)]
mod tests;
