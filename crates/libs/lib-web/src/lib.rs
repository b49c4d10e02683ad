//! # Web Library
//!
//! HTTP handlers, middleware, router, and server bootstrap.
//!
//! ## Endpoints
//!
//! ```text
//! POST /api/auth/register   {email, password, full_name?}   -> 201 {message}
//! POST /api/auth/login      {email, password}               -> 200 {access_token, token_type}
//! GET  /api/auth/me         Authorization: Bearer <token>   -> 200 {user_id, email, exp, expires_at}
//! GET  /api/leads                                           -> 200 [Lead]
//! POST /api/leads           {name, email, phone?, notes?}   -> 201 Lead
//! GET  /health                                              -> 200 "OK"
//! ```
//!
//! ```bash
//! curl -X POST localhost:8000/api/auth/login \
//!   -H 'content-type: application/json' \
//!   -d '{"email":"a@b.com","password":"Password123!"}'
//! ```

pub mod handlers;
pub mod middleware;
pub mod server;

#[cfg(test)]
pub(crate) mod test_utils;

pub use server::{create_router, start_server, AppState, ServerConfig};
