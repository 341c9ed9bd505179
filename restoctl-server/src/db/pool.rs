//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. The pool is built once
//! at startup and shared by every request through the [`Gateway`].
//!
//! [`Gateway`]: super::Gateway

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Default maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Default time a request waits for a free connection.
const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Pool sizing and acquisition limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }
}

/// Create a PostgreSQL connection pool with default limits.
///
/// # Errors
///
/// Returns an error if the connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/restoctl").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, PoolConfig::default()).await
}

/// Create a PostgreSQL connection pool with custom limits.
pub async fn create_pool_with_options(
    database_url: &str,
    config: PoolConfig,
) -> Result<PgPool, sqlx::Error> {
    options(config).connect(database_url).await
}

/// Create a pool that connects on first use.
///
/// Startup does not fail if the database is down; the first request does.
pub fn create_lazy_pool(database_url: &str, config: PoolConfig) -> Result<PgPool, sqlx::Error> {
    options(config).connect_lazy(database_url)
}

fn options(config: PoolConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections.max(1))
        .acquire_timeout(config.acquire_timeout)
}
