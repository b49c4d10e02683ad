//! # User Repository
//!
//! Provides database access layer for user-related operations.
//!
//! ## Example
//!
//! ```rust,no_run
//! # use lib_core::model::store::{create_pool, UserForCreate, UserRepository};
//! # async fn example() -> anyhow::Result<()> {
//! let pool = create_pool("sqlite::memory:").await?;
//!
//! let user = UserRepository::create(
//!     &pool,
//!     &UserForCreate::new("alice@example.com".into(), "$argon2id$...".into(), None),
//! ).await?;
//!
//! let found = UserRepository::find_by_email(&pool, "alice@example.com").await?;
//! assert_eq!(found.map(|u| u.id), Some(user.id));
//! # Ok(())
//! # }
//! ```

use super::models::{User, UserForCreate};
use super::DbPool;
use sqlx::query_as;

/// User repository for database operations.
pub struct UserRepository;

impl UserRepository {
    /// Find a user by their email address.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(User))` - User found with matching email
    /// * `Ok(None)` - No user found with that email
    /// * `Err(sqlx::Error)` - Database error occurred
    pub async fn find_by_email(pool: &DbPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        query_as::<_, User>("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by primary key.
    pub async fn find_by_id(pool: &DbPool, id: i64) -> Result<Option<User>, sqlx::Error> {
        query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new user in the database.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if:
    /// - Email already exists (UNIQUE constraint violation)
    /// - Database connection fails
    pub async fn create(pool: &DbPool, user_data: &UserForCreate) -> Result<User, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO users (email, password_hash, full_name) VALUES (?, ?, ?)"
        )
        .bind(&user_data.email)
        .bind(&user_data.password_hash)
        .bind(&user_data.full_name)
        .execute(pool)
        .await?;

        let id = result.last_insert_rowid();

        query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
