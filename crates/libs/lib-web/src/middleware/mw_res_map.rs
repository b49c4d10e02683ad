//! # Response Mapping Middleware
//!
//! Logs server error responses and sets `Cache-Control: no-store` on every response.

use axum::{
    extract::Request,
    http::{header::CACHE_CONTROL, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::error;

pub async fn map_res(req: Request, next: Next) -> Response {
    let mut res = next.run(req).await;

    if res.status().is_server_error() {
        error!("[RESPONSE] Server error: {}", res.status());
    }

    res.headers_mut()
        .insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));

    res
}
