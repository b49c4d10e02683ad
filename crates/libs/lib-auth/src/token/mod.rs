//! # JWT Token Management
//!
//! Issuing and validating HS256-signed JSON Web Tokens.
//!
//! A token is the standard three-part `header.payload.signature` string. The payload
//! carries the caller's [`Claims`] plus a numeric `exp` (Unix seconds). A token is
//! valid while its signature matches the issuer's secret and the current time is
//! strictly before `exp`; no leeway is applied.
//!
//! ## Example
//!
//! ```rust
//! use lib_auth::{Claims, TokenIssuer};
//!
//! let issuer = TokenIssuer::new("test-secret-key-must-be-at-least-32-chars-long!")?;
//! let token = issuer.issue(&Claims::new(7, "a@b.com"))?;
//!
//! let verified = issuer.validate(&token).expect("fresh token is valid");
//! assert_eq!(verified.claims.user_id, 7);
//! # Ok::<(), lib_auth::Error>(())
//! ```

use crate::error::{Error, Result, TokenError};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use lib_utils::now_utc;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Token lifetime used by [`TokenIssuer::issue`] unless overridden.
pub const DEFAULT_TTL_MINUTES: i64 = 60;

/// Claim names owned by the token format; custom claims cannot shadow them.
const RESERVED_CLAIMS: &[&str] = &["user_id", "email", "exp"];

/// Claims supplied by the caller when issuing a token.
///
/// `extra` holds any additional custom claims and is flattened into the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// User identifier
    pub user_id: i64,
    /// User email
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Claims {
    pub fn new(user_id: i64, email: impl Into<String>) -> Self {
        Self {
            user_id,
            email: email.into(),
            extra: Map::new(),
        }
    }

    /// Add a custom claim. Reserved names are dropped when the token is issued.
    pub fn with_claim(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }
}

/// Claims decoded from a token that passed signature and expiry checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifiedClaims {
    #[serde(flatten)]
    pub claims: Claims,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Signs and validates tokens with a symmetric secret.
///
/// Built once at startup and shared; it holds no mutable state.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    default_ttl: Duration,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("algorithm", &Algorithm::HS256)
            .field("default_ttl", &self.default_ttl)
            .finish_non_exhaustive()
    }
}

impl TokenIssuer {
    /// Create an issuer for `secret`.
    ///
    /// # Errors
    ///
    /// [`Error::MissingSecret`] if the secret is empty or only whitespace.
    pub fn new(secret: &str) -> Result<Self> {
        if secret.trim().is_empty() {
            return Err(Error::MissingSecret);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked in `check_at` against an explicit clock.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            default_ttl: Duration::minutes(DEFAULT_TTL_MINUTES),
        })
    }

    /// Set the lifetime used by [`issue`](Self::issue).
    pub fn with_default_ttl(mut self, ttl: Duration) -> Self {
        self.default_ttl = ttl;
        self
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Issue a token that expires after the default lifetime.
    pub fn issue(&self, claims: &Claims) -> Result<String> {
        self.issue_with_ttl(claims, self.default_ttl)
    }

    /// Issue a token that expires `ttl` from now. A negative `ttl` yields an expired token.
    pub fn issue_with_ttl(&self, claims: &Claims, ttl: Duration) -> Result<String> {
        self.issue_at(claims, ttl, now_utc())
    }

    /// Issue a token as if the current time were `now`.
    pub fn issue_at(&self, claims: &Claims, ttl: Duration, now: DateTime<Utc>) -> Result<String> {
        let exp = now.checked_add_signed(ttl).ok_or(Error::InvalidTtl)?;

        let mut claims = claims.clone();
        claims.extra.retain(|name, _| !RESERVED_CLAIMS.contains(&name.as_str()));

        let payload = VerifiedClaims {
            claims,
            exp: exp.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &payload, &self.encoding_key)
            .map_err(|e| Error::TokenEncode(e.to_string()))
    }

    /// Validate a token, collapsing every failure into `None`.
    pub fn validate(&self, token: &str) -> Option<VerifiedClaims> {
        self.validate_at(token, now_utc())
    }

    /// [`validate`](Self::validate) against an explicit clock.
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> Option<VerifiedClaims> {
        match self.check_at(token, now) {
            Ok(verified) => Some(verified),
            Err(TokenError::BadSignature) => {
                warn!("[TOKEN] Rejected token: {}", TokenError::BadSignature);
                None
            }
            Err(e) => {
                debug!("[TOKEN] Rejected token: {}", e);
                None
            }
        }
    }

    /// Validate a token and report why it was rejected.
    pub fn check(&self, token: &str) -> std::result::Result<VerifiedClaims, TokenError> {
        self.check_at(token, now_utc())
    }

    /// [`check`](Self::check) against an explicit clock.
    pub fn check_at(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> std::result::Result<VerifiedClaims, TokenError> {
        let token_data = decode::<VerifiedClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenError::BadSignature,
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed,
            })?;

        let verified = token_data.claims;
        if now.timestamp() >= verified.exp {
            return Err(TokenError::Expired);
        }

        Ok(verified)
    }
}
