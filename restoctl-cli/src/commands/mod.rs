//! Command implementations for restoctl CLI

pub mod account;
pub mod migrate;
pub mod serve;

pub use account::run_account;
pub use migrate::run_migrate;
pub use serve::run_serve;

use anyhow::{Context, Result};
use clap::Args;
use restoctl_server::db::{create_pool_with_options, Gateway, PoolConfig};

/// Database connection options shared by every command
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,

    /// Maximum pooled connections
    #[arg(long, env = "RESTOCTL_MAX_CONNECTIONS", default_value_t = 5)]
    pub max_connections: u32,

    /// Seconds to wait for a free connection
    #[arg(long = "acquire-timeout", env = "RESTOCTL_ACQUIRE_TIMEOUT", default_value_t = 5)]
    pub acquire_timeout_secs: u64,
}

impl DatabaseArgs {
    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig {
            max_connections: self.max_connections,
            acquire_timeout: std::time::Duration::from_secs(self.acquire_timeout_secs),
        }
    }

    /// Connect eagerly so a bad URL fails at startup.
    pub async fn connect(&self) -> Result<Gateway> {
        let pool = create_pool_with_options(&self.database_url, self.pool_config())
            .await
            .context("Failed to create database pool")?;
        Ok(Gateway::new(pool))
    }
}
