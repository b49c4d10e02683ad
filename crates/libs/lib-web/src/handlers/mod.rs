//! # HTTP Request Handlers
//!
//! Axum HTTP request handlers organized by feature domain.
//!
//! ## Handler Modules
//!
//! - **[`auth`]**: Registration, login, and the current identity
//!   - `POST /api/auth/register` - Create new user account
//!   - `POST /api/auth/login` - Exchange email/password for a bearer token
//!   - `GET /api/auth/me` - Claims of the presented token (protected)
//!
//! - **[`leads`]**: Lead capture
//!   - `GET /api/leads` - List leads
//!   - `POST /api/leads` - Create a lead
//!
//! ## Error Handling
//!
//! Handlers return `Result<T, AppError>`; [`lib_core::AppError`] renders itself as a
//! JSON `{"error", "code"}` body with the matching status code.
//!
//! ## Request/Response Flow
//!
//! ```text
//! Client Request
//!     ↓
//! CORS → Request stamp → Trace span → Logging
//!     ↓
//! Auth Middleware (protected routes only)
//!     ↓
//! Handler
//!     ↓
//! Client Response
//! ```

pub mod auth;
pub mod leads;
