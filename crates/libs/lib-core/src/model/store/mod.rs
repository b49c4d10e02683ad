//! # Database Store
//!
//! Database connection pool, migrations, and repository implementations.

// region: --- Modules
pub mod models;
pub mod user_repository;
pub mod lead_repository;
// endregion: --- Modules

// region: --- Re-exports
pub use lead_repository::LeadRepository;
pub use models::{Lead, LeadForCreate, User, UserForCreate};
pub use user_repository::UserRepository;
// endregion: --- Re-exports

// region: --- Types and Functions
use sqlx::{migrate::Migrator, sqlite::SqliteConnectOptions, SqlitePool};
use std::path::Path;

/// Type alias for SQLite connection pool.
pub type DbPool = SqlitePool;

/// Create a new SQLite connection pool, creating the database file if missing.
pub async fn create_pool(database_url: &str) -> anyhow::Result<DbPool> {
    let options = database_url
        .parse::<SqliteConnectOptions>()?
        .create_if_missing(true);

    let pool = SqlitePool::connect_with(options).await?;

    Ok(pool)
}

/// Apply the SQL migrations found in `migrations_path`.
pub async fn run_migrations(pool: &DbPool, migrations_path: impl AsRef<Path>) -> anyhow::Result<()> {
    let migrator = Migrator::new(migrations_path.as_ref()).await?;
    migrator.run(pool).await?;
    Ok(())
}
// endregion: --- Types and Functions

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    /// Single-connection in-memory database with the real migrations applied.
    pub async fn setup_test_db() -> DbPool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");

        run_migrations(&pool, concat!(env!("CARGO_MANIFEST_DIR"), "/../../../migrations"))
            .await
            .expect("Failed to run migrations");

        pool
    }
}
