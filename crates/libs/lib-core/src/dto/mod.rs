//! # Data Transfer Objects (DTOs)
//!
//! Request and response bodies exchanged over the REST API.

pub mod auth;
pub mod lead;

pub use auth::*;
pub use lead::*;
