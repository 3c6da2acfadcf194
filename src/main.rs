/**
 * Campus Hub Server Entry Point
 *
 * This is the main entry point for the Campus Hub backend server.
 * It loads configuration, connects to PostgreSQL and starts the Axum
 * HTTP server.
 *
 * # Startup
 *
 * 1. Load environment variables from `.env` if present
 * 2. Initialize tracing from `RUST_LOG`
 * 3. Load configuration (`DATABASE_URL` is required, `PORT` defaults to 5000)
 * 4. Connect to the database and run migrations
 * 5. Bind and serve
 *
 * A missing `DATABASE_URL` or a failed connection is fatal: the process
 * logs the error and exits non-zero. The front end cannot register or
 * log anyone in without the credential store, so there is no degraded mode.
 */
use campushub::auth::postgres::PgCredentialStore;
use campushub::server::config::{self, ServerConfig};
use campushub::server::create_app;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    let pool = match config::connect_database(&config.database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Database connection error: {e}");
            std::process::exit(1);
        }
    };

    let app = create_app(Arc::new(PgCredentialStore::new(pool)));

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server running on http://localhost:{}", config.port);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {addr}: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}
