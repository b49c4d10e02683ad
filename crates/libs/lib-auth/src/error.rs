//! # Authentication Errors

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures while producing credentials or tokens.
///
/// Verification failures are not represented here: `verify_password` answers with a
/// `bool` and token validation with [`TokenError`].
#[derive(Debug, Error)]
pub enum Error {
    #[error("Password cannot be empty")]
    EmptyPassword,

    #[error("Password must be at most {max} bytes long")]
    PasswordTooLong { max: usize },

    #[error("Failed to hash password: {0}")]
    Hash(String),

    #[error("Token signing secret is missing or empty")]
    MissingSecret,

    #[error("Token lifetime is out of range")]
    InvalidTtl,

    #[error("Failed to encode token: {0}")]
    TokenEncode(String),
}

/// Why a presented token was rejected.
///
/// Kept for logging only. Callers outside this crate see a single "invalid" outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token is malformed")]
    Malformed,

    #[error("token signature is invalid")]
    BadSignature,

    #[error("token has expired")]
    Expired,
}
