//! # Lead Repository

use super::models::{Lead, LeadForCreate};
use super::DbPool;
use sqlx::query_as;

pub struct LeadRepository;

impl LeadRepository {
    /// All leads, oldest first.
    pub async fn list(pool: &DbPool) -> Result<Vec<Lead>, sqlx::Error> {
        query_as::<_, Lead>("SELECT * FROM leads ORDER BY id ASC")
            .fetch_all(pool)
            .await
    }

    /// Insert a lead and return the stored row.
    pub async fn create(pool: &DbPool, lead: &LeadForCreate) -> Result<Lead, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO leads (name, email, phone, notes) VALUES (?, ?, ?, ?)"
        )
        .bind(&lead.name)
        .bind(&lead.email)
        .bind(&lead.phone)
        .bind(&lead.notes)
        .execute(pool)
        .await?;

        query_as::<_, Lead>("SELECT * FROM leads WHERE id = ?")
            .bind(result.last_insert_rowid())
            .fetch_one(pool)
            .await
    }
}
