//! # Authentication Library
//!
//! Password hashing and verification, plus signed-token issuance and validation.
//!
//! - [`pwd`]: Argon2id credential hashing. Verification never errors; a malformed
//!   stored hash simply does not verify.
//! - [`token`]: HS256 JWT issuing and validation through [`TokenIssuer`], which owns
//!   the signing secret handed to it at construction.

pub mod error;
pub mod pwd;
pub mod token;

// Re-export commonly used types
pub use error::{Error, Result, TokenError};
pub use pwd::{hash_password, verify_password, MAX_PASSWORD_LEN};
pub use token::{Claims, TokenIssuer, VerifiedClaims, DEFAULT_TTL_MINUTES};
