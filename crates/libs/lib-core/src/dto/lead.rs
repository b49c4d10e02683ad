//! # Lead Data Transfer Objects
//!
//! `POST /api/leads` accepts a [`LeadRequest`] and answers with the stored
//! [`Lead`](crate::model::store::models::Lead).

use serde::{Deserialize, Serialize};

/// Lead capture request, as submitted by a booking or contact form.
///
/// ```json
/// {
///   "name": "Grace Hopper",
///   "email": "grace@example.com",
///   "phone": "+1 555 0100",
///   "notes": "Wants a consultation on Friday"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeadRequest {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
