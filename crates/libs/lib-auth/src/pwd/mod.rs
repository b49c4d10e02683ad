//! # Password Hashing
//!
//! Password hashing and verification using Argon2.
//!
//! Hashes are PHC strings (`$argon2id$v=19$...`) carrying their own random salt and
//! parameters, so they can be stored as-is and verified without extra state.

use crate::error::{Error, Result};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use tracing::warn;

/// Longest accepted plaintext, in bytes.
pub const MAX_PASSWORD_LEN: usize = 1024;

/// Hash a password using the Argon2 algorithm.
///
/// Every call draws a fresh salt, so hashing the same plaintext twice yields two
/// different strings that both verify.
pub fn hash_password(password: &str) -> Result<String> {
    if password.is_empty() {
        return Err(Error::EmptyPassword);
    }

    if password.len() > MAX_PASSWORD_LEN {
        return Err(Error::PasswordTooLong {
            max: MAX_PASSWORD_LEN,
        });
    }

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| Error::Hash(e.to_string()))?
        .to_string();

    Ok(password_hash)
}

/// Verify a plaintext password against an Argon2 hash.
///
/// Returns `false` on mismatch and on a hash that cannot be parsed.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let parsed_hash = match PasswordHash::new(hash) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("[PWD] Stored password hash is malformed: {}", e);
            return false;
        }
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hashing() {
        let password = "TestPassword123!";
        let hash = hash_password(password)
            .expect("Password hashing should succeed for valid password");

        assert!(verify_password(password, &hash));
        assert!(!verify_password("WrongPassword", &hash));
    }

    #[test]
    fn test_same_password_hashes_differently() {
        let password = "correct horse battery staple";
        let first = hash_password(password).expect("first hash");
        let second = hash_password(password).expect("second hash");

        assert_ne!(first, second);
        assert!(verify_password(password, &first));
        assert!(verify_password(password, &second));
    }

    #[test]
    fn test_hash_is_salted_argon2id() {
        let hash = hash_password("TestPassword123!").expect("hash");

        assert!(hash.starts_with("$argon2id$"));
        assert!(!hash.contains("TestPassword123!"));
    }

    #[test]
    fn test_malformed_hash_does_not_verify() {
        assert!(!verify_password("TestPassword123!", ""));
        assert!(!verify_password("TestPassword123!", "not-a-hash"));
        assert!(!verify_password("TestPassword123!", "$argon2id$v=19$garbage"));
        assert!(!verify_password(
            "TestPassword123!",
            "$2b$12$R9h/cIPz0gi.URNNX3kh2OPST9/PgBkqquzi.Ss7KIUgO2t0jWMUW"
        ));
    }

    #[test]
    fn test_empty_password_rejected() {
        assert!(matches!(hash_password(""), Err(Error::EmptyPassword)));
    }

    #[test]
    fn test_oversized_password_rejected() {
        let long = "x".repeat(MAX_PASSWORD_LEN + 1);
        assert!(matches!(
            hash_password(&long),
            Err(Error::PasswordTooLong { max: MAX_PASSWORD_LEN })
        ));
    }

    #[test]
    fn test_unicode_password() {
        let password = "pässwörd-密码-🔑";
        let hash = hash_password(password).expect("hash");

        assert!(verify_password(password, &hash));
        assert!(!verify_password("passwort-密码-🔑", &hash));
    }
}
