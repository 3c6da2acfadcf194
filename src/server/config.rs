/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration:
 * the PostgreSQL connection string and the listening port.
 *
 * # Configuration Sources
 *
 * Configuration is loaded from environment variables (`dotenv` has already
 * populated them from `.env` by the time `from_env` runs):
 *
 * - `DATABASE_URL` - PostgreSQL connection string, required
 * - `PORT` - listening port, defaults to 5000
 *
 * # Error Handling
 *
 * A missing `DATABASE_URL` is a hard configuration error. The server has
 * no useful degraded mode without the credential store, so the caller is
 * expected to log the error and exit.
 */
use sqlx::PgPool;
use thiserror::Error;

/// Default listening port when `PORT` is unset or unparseable
const DEFAULT_PORT: u16 = 5000;

/// Configuration errors raised at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `DATABASE_URL` is not set
    #[error("DATABASE_URL is not set")]
    MissingDatabaseUrl,
}

/// Server configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// PostgreSQL connection string
    pub database_url: String,
    /// Port the HTTP server listens on
    pub port: u16,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingDatabaseUrl` if `DATABASE_URL` is unset.
    /// An unparseable `PORT` falls back to the default rather than failing.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingDatabaseUrl)?;

        let port = std::env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Ok(Self { database_url, port })
    }
}

/// Connect to PostgreSQL and run pending migrations
///
/// # Arguments
///
/// * `database_url` - PostgreSQL connection string
///
/// # Errors
///
/// Returns the underlying `sqlx::Error` if the connection or a migration
/// fails. Both are fatal at startup; the caller exits.
pub async fn connect_database(database_url: &str) -> Result<PgPool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let pool = PgPool::connect(database_url).await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;

    tracing::info!("Database ready");
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // These tests mutate process environment variables, so they must not
    // run concurrently with each other.

    #[test]
    #[serial]
    fn test_missing_database_url_is_an_error() {
        std::env::remove_var("DATABASE_URL");
        let result = ServerConfig::from_env();
        assert!(matches!(result, Err(ConfigError::MissingDatabaseUrl)));
    }

    #[test]
    #[serial]
    fn test_port_defaults_when_unset() {
        std::env::set_var("DATABASE_URL", "postgres://localhost/campushub");
        std::env::remove_var("PORT");
        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        std::env::remove_var("DATABASE_URL");
    }

    #[test]
    #[serial]
    fn test_unparseable_port_falls_back_to_default() {
        std::env::set_var("DATABASE_URL", "postgres://localhost/campushub");
        std::env::set_var("PORT", "not-a-port");
        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        std::env::remove_var("PORT");
        std::env::remove_var("DATABASE_URL");
    }
}
