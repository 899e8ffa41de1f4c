//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. Without a database
//! URL, connection parameters come from the libpq environment variables
//! (`PGHOST`, `PGPORT`, `PGUSER`, `PGPASSWORD`, `PGDATABASE`).

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Connection settings for the item database
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection string; `None` falls back to PG* variables
    pub url: Option<String>,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl DatabaseConfig {
    /// Resolve connect options from the URL or the environment.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        match &self.url {
            Some(url) => url.parse(),
            None => Ok(PgConnectOptions::new()),
        }
    }
}

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the URL is invalid or the first connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DatabaseConfig::default()).await?;
/// ```
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(config.connect_options()?, config.max_connections).await
}

/// Create a PostgreSQL connection pool from explicit connect options.
pub async fn create_pool_with_options(
    options: PgConnectOptions,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    tracing::debug!(
        host = options.get_host(),
        database = options.get_database().unwrap_or("<default>"),
        max_connections,
        "Connecting to PostgreSQL"
    );

    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Create a pool that connects on first use.
///
/// Only the connect options are checked here, so a server can start (and
/// answer `/health`) while the database is unreachable.
///
/// # Errors
///
/// Returns an error if the URL is invalid.
pub fn create_lazy_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let options = config.connect_options()?;
    tracing::debug!(
        host = options.get_host(),
        database = options.get_database().unwrap_or("<default>"),
        max_connections = config.max_connections,
        "PostgreSQL pool will connect on first use"
    );

    Ok(PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_lazy_with(options))
}
