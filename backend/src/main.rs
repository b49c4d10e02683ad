//! # Backend Service
//!
//! Thin entry point that delegates to lib-web for server setup.

use lib_utils::get_env_or;
use lib_web::{start_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = ServerConfig {
        bind_address: get_env_or("BIND_ADDRESS", "127.0.0.1:8000"),
        migrations_path: "migrations",
        ..Default::default()
    };

    start_server(config).await
}
