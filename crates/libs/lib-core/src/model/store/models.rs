use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User entity representing a complete user record from the database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub full_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Data structure for creating a new user.
///
/// Password must be hashed before creating.
#[derive(Debug, Clone)]
pub struct UserForCreate {
    pub email: String,
    pub password_hash: String,
    pub full_name: Option<String>,
}

impl UserForCreate {
    /// Create a new `UserForCreate` instance.
    pub fn new(email: String, password_hash: String, full_name: Option<String>) -> Self {
        Self {
            email,
            password_hash,
            full_name,
        }
    }
}

/// Lead captured from a public form.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq)]
pub struct Lead {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Data structure for creating a new lead.
#[derive(Debug, Clone)]
pub struct LeadForCreate {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub notes: Option<String>,
}
