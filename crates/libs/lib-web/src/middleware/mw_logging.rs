//! # Request/Response Logging Middleware
//!
//! One structured line per request and one per response, keyed by the request ID
//! set by [`stamp_req`](super::stamp_req).
//!
//! Request bodies are never logged; auth endpoints carry plaintext passwords.
//! Credential-bearing headers are redacted before they reach the debug log.

use crate::middleware::mw_req_stamp::RequestStamp;
use axum::{
    extract::Request,
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{debug, error, info, warn};

const REDACTED: &str = "***REDACTED***";

/// Headers whose values are replaced with [`REDACTED`].
static SENSITIVE_HEADERS: [header::HeaderName; 4] = [
    header::AUTHORIZATION,
    header::COOKIE,
    header::SET_COOKIE,
    header::PROXY_AUTHORIZATION,
];

/// Header name/value pairs safe to write to the log.
fn sanitize_headers(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            if SENSITIVE_HEADERS.contains(name) {
                Some((name.to_string(), REDACTED.to_string()))
            } else {
                value.to_str().ok().map(|v| (name.to_string(), v.to_string()))
            }
        })
        .collect()
}

pub async fn log_requests(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let request_id = req
        .extensions()
        .get::<RequestStamp>()
        .map(|s| s.id.clone())
        .unwrap_or_else(|| "unknown".to_string());

    let has_bearer = req.headers().contains_key(header::AUTHORIZATION);

    info!(
        request_id = %request_id,
        method = %method,
        path = %path,
        authenticated = has_bearer,
        "[REQUEST] {} {}",
        method,
        path
    );
    debug!(request_id = %request_id, headers = ?sanitize_headers(req.headers()), "[REQUEST HEADERS]");

    let response = next.run(req).await;

    let elapsed_ms = start.elapsed().as_millis();
    let status = response.status().as_u16();

    match status {
        500.. => error!(request_id = %request_id, status, elapsed_ms, "[RESPONSE] {} {} -> {}", method, path, status),
        400..=499 => warn!(request_id = %request_id, status, elapsed_ms, "[RESPONSE] {} {} -> {}", method, path, status),
        _ => info!(request_id = %request_id, status, elapsed_ms, "[RESPONSE] {} {} -> {}", method, path, status),
    }

    response
}
