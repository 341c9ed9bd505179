//! Account management
//!
//! Accounts are created out of band; the HTTP API only verifies them.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use restoctl_server::db::{AccountRepo, DbError};
use restoctl_server::models::{Password, Username};

use super::DatabaseArgs;

#[derive(Parser, Debug)]
pub struct AccountArgs {
    #[command(subcommand)]
    pub command: AccountCommand,
}

#[derive(Subcommand, Debug)]
pub enum AccountCommand {
    /// Create a login account (password stored as a salted argon2 hash)
    Create {
        /// Login identifier
        #[arg(long, short = 'u')]
        username: String,

        /// Password (prefer RESTOCTL_PASSWORD to keep it out of shell history)
        #[arg(long, short = 'p', env = "RESTOCTL_PASSWORD", hide_env_values = true)]
        password: String,

        #[command(flatten)]
        db: DatabaseArgs,
    },
}

pub async fn run_account(args: AccountArgs) -> Result<()> {
    match args.command {
        AccountCommand::Create {
            username,
            password,
            db,
        } => {
            let username = Username::new(&username).context("Invalid username")?;
            let password = Password::new(&password).context("Invalid password")?;
            let gateway = db.connect().await?;

            match AccountRepo::new(&gateway).create(&username, &password).await {
                Ok(()) => {
                    println!("Created account '{}'", username.as_str());
                    Ok(())
                }
                Err(DbError::Conflict { .. }) => {
                    anyhow::bail!("Account '{}' already exists", username.as_str())
                }
                Err(e) => Err(anyhow::Error::new(e).context("Failed to create account")),
            }
        }
    }
}
