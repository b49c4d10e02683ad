//! # Application Configuration
//!
//! This module manages application configuration loaded from environment variables.
//! All configuration is validated on startup to fail fast if misconfigured.
//!
//! | Variable            | Required | Default                 |
//! |---------------------|----------|-------------------------|
//! | `SECRET_KEY`        | yes      |                         |
//! | `DATABASE_URL`      | no       | `sqlite:data/leads.db`  |
//! | `TOKEN_TTL_MINUTES` | no       | `60`                    |
//!
//! The configuration is built once in the server bootstrap and handed to the
//! components that need it; there is no global instance.
//!
//! ```rust,no_run
//! use lib_core::Config;
//!
//! let config = Config::load()?;
//! println!("Database: {}", config.database_url);
//! # Ok::<(), lib_core::AppError>(())
//! ```

use crate::error::{AppError, Result};
use lib_utils::{get_env, get_env_or, get_env_parse_or};
use tracing::warn;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:data/leads.db";
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 60;

/// Upper bound for `TOKEN_TTL_MINUTES` (30 days).
pub const MAX_TOKEN_TTL_MINUTES: i64 = 30 * 24 * 60;

/// Secrets shorter than this are accepted but logged as weak.
pub const RECOMMENDED_SECRET_LEN: usize = 32;

/// Application configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    /// SQLite database connection URL
    pub database_url: String,

    /// Symmetric secret for token signing and verification
    pub secret_key: String,

    /// Token validity period in minutes
    ///
    /// Valid range: 1 minute to 30 days.
    pub token_ttl_minutes: i64,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &self.database_url)
            .field("secret_key", &"***REDACTED***")
            .field("token_ttl_minutes", &self.token_ttl_minutes)
            .finish()
    }
}

impl Config {
    /// Load `.env` (if present), read the environment and validate the result.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self::from_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let database_url = get_env_or("DATABASE_URL", DEFAULT_DATABASE_URL);

        let secret_key = get_env("SECRET_KEY").map_err(|e| AppError::Config(e.to_string()))?;

        let token_ttl_minutes = get_env_parse_or("TOKEN_TTL_MINUTES", DEFAULT_TOKEN_TTL_MINUTES)
            .map_err(|e| AppError::Config(e.to_string()))?;

        Ok(Self {
            database_url,
            secret_key,
            token_ttl_minutes,
        })
    }

    /// Validate configuration values against security and business rules.
    pub fn validate(&self) -> Result<()> {
        if self.secret_key.trim().is_empty() {
            return Err(AppError::Config("SECRET_KEY must not be empty".to_string()));
        }

        if self.secret_key.len() < RECOMMENDED_SECRET_LEN {
            warn!(
                "[CONFIG] SECRET_KEY is shorter than {} characters; use a longer random value",
                RECOMMENDED_SECRET_LEN
            );
        }

        if !(1..=MAX_TOKEN_TTL_MINUTES).contains(&self.token_ttl_minutes) {
            return Err(AppError::Config(format!(
                "TOKEN_TTL_MINUTES must be between 1 and {}",
                MAX_TOKEN_TTL_MINUTES
            )));
        }

        if self.database_url.trim().is_empty() {
            return Err(AppError::Config("DATABASE_URL must not be empty".to_string()));
        }

        Ok(())
    }
}
