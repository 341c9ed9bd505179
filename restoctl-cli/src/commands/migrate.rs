//! Apply the database schema without starting the server

use anyhow::{Context, Result};
use clap::Parser;
use restoctl_server::db::migrations;

use super::DatabaseArgs;

#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let gateway = args.db.connect().await?;
    migrations::run(&gateway)
        .await
        .context("Failed to run migrations")?;
    println!("Schema is up to date");
    Ok(())
}
