//! # Server Setup
//!
//! Server initialization, route registration, and HTTP server startup.
//!
//! This module provides the main server setup function that loads configuration,
//! prepares the database, builds the token issuer, registers all routes, applies
//! middleware, and starts the HTTP server.

// region: --- Imports
use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    routing::{get, post},
    Router,
};
use chrono::Duration;
use lib_auth::TokenIssuer;
use lib_core::{Config, DbPool, create_pool};
use lib_core::model::store::run_migrations;
use crate::handlers;
use crate::middleware::{log_requests, map_res, require_auth, stamp_req, RequestStamp};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;
// endregion: --- Imports

// region: --- AppState
/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub config: Config,
    pub tokens: Arc<TokenIssuer>,
}

impl AppState {
    /// Build the state, deriving the token issuer from `config`.
    pub fn new(db: DbPool, config: Config) -> anyhow::Result<Self> {
        let tokens = TokenIssuer::new(&config.secret_key)?
            .with_default_ttl(Duration::minutes(config.token_ttl_minutes));

        Ok(Self {
            db,
            config,
            tokens: Arc::new(tokens),
        })
    }
}

impl axum::extract::FromRef<AppState> for DbPool {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl axum::extract::FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl axum::extract::FromRef<AppState> for Arc<TokenIssuer> {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}
// endregion: --- AppState

// region: --- Server Configuration
/// Server configuration
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:8000")
    pub bind_address: String,
    /// Allowed CORS origins
    pub allowed_origins: Vec<String>,
    /// Database migrations path
    pub migrations_path: &'static str,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8000".to_string(),
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
                "http://localhost:5173".to_string(),
                "http://127.0.0.1:5173".to_string(),
            ],
            migrations_path: "./migrations",
        }
    }
}
// endregion: --- Server Configuration

// region: --- Server Setup
/// Initialize and start the HTTP server
///
/// # Errors
///
/// This function will return an error if:
/// - Configuration loading fails (including a missing `SECRET_KEY`)
/// - Database connection fails
/// - Database migrations fail
/// - Server binding fails
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    init_tracing();

    info!(" LEAD BACKEND STARTING");

    info!("Loading configuration...");
    let app_config = Config::load()?;

    info!("Database URL: {}", app_config.database_url);

    // Ensure data directory exists for SQLite database
    if let Some(db_path) = app_config.database_url.strip_prefix("sqlite:") {
        let db_path = db_path.trim_start_matches("//");
        if let Some(parent) = std::path::Path::new(db_path).parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
                info!("Created database directory: {:?}", parent);
            }
        }
    }

    info!("Connecting to database...");
    let pool = create_pool(&app_config.database_url).await?;

    info!(" Running database migrations from: {}", config.migrations_path);
    run_migrations(&pool, config.migrations_path).await?;
    info!(" Migrations complete");

    let state = AppState::new(pool, app_config)?;
    info!(
        " Token issuer ready (HS256, ttl {} min)",
        state.tokens.default_ttl().num_minutes()
    );

    let app = create_router(state, &config.allowed_origins);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;

    info!(" SERVER READY: http://{}", config.bind_address);
    log_server_info();

    axum::serve(listener, app).await?;
    Ok(())
}

/// Install the global tracing subscriber; level comes from `LOG_LEVEL` (default `info`).
fn init_tracing() {
    let log_level = std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase();

    let filter = tracing_subscriber::EnvFilter::try_new(&log_level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let initialized = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .with_file(true)
        .try_init()
        .is_ok();

    if initialized {
        info!(" Log level: {}", log_level);
    }
}

/// Create the main application router with all routes
pub fn create_router(state: AppState, allowed_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let protected = Router::new()
        .route("/api/auth/me", get(handlers::auth::me))
        .route_layer(axum::middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/api/auth/register", post(handlers::auth::register))
        .route("/api/auth/login", post(handlers::auth::login))
        .route(
            "/api/leads",
            get(handlers::leads::list_leads).post(handlers::leads::create_lead),
        )
        .route("/health", get(|| async { "OK" }))
        .merge(protected)
        .fallback(|| async {
            info!("[404 HANDLER] Unmatched route - returning 404");
            (StatusCode::NOT_FOUND, "Route not found")
        })
        .with_state(state)
        .layer(axum::middleware::from_fn(map_res))
        .layer(axum::middleware::from_fn(log_requests))
        // Tower HTTP trace layer for spans; runs inside `stamp_req` so the ID is available
        .layer(
            tower_http::trace::TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    let request_id = request
                        .extensions()
                        .get::<RequestStamp>()
                        .map(|s| s.id.clone())
                        .unwrap_or_else(|| "unknown".to_string());
                    tracing::info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = %request.method(),
                        uri = %request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_failure(
                    |error: tower_http::classify::ServerErrorsFailureClass,
                     latency: std::time::Duration,
                     _span: &tracing::Span| {
                        tracing::error!(
                            error = ?error,
                            latency_ms = latency.as_millis(),
                            "[HTTP FAILURE] Error: {:?}, Latency: {}ms",
                            error,
                            latency.as_millis()
                        );
                    },
                ),
        )
        .layer(axum::middleware::from_fn(stamp_req))
        .layer(cors)
}

/// Log server information
fn log_server_info() {
    info!(" AUTH:");
    info!("   • POST /api/auth/register");
    info!("   • POST /api/auth/login");
    info!("   • GET  /api/auth/me (Bearer token)");
    info!(" LEADS:");
    info!("   • GET  /api/leads");
    info!("   • POST /api/leads");
    info!(" HEALTH:");
    info!("   • GET  /health");
}
// endregion: --- Server Setup
