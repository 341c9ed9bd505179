//! restoctl CLI - restaurant management backend
//!
//! - `serve`: run the HTTP API
//! - `migrate`: create missing tables
//! - `account create`: add a login account

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "restoctl",
    author,
    version,
    about = "Restaurant management backend: reservations, menu, orders"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create missing database tables
    Migrate(commands::migrate::MigrateArgs),
    /// Manage login accounts
    Account(commands::account::AccountArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Migrate(args) => commands::run_migrate(args).await?,
        Commands::Account(args) => commands::run_account(args).await?,
    }

    Ok(())
}
