//! Account repository
//!
//! - create: hash with argon2, INSERT relying on the primary key for uniqueness
//! - authenticate: fetch by username, verify hash outside the database

use sqlx::Row;

use crate::db::gateway::{DbError, Gateway};
use crate::models::{Password, Username};

/// Postgres unique_violation
const UNIQUE_VIOLATION: &str = "23505";

/// Account repository
pub struct AccountRepo<'a> {
    gateway: &'a Gateway,
}

impl<'a> AccountRepo<'a> {
    pub fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// Create an account with a salted password hash.
    ///
    /// Returns `DbError::Conflict` if the username is taken.
    pub async fn create(&self, username: &Username, password: &Password) -> Result<(), DbError> {
        let hash = password
            .hash()
            .map_err(|e| DbError::PasswordHash(e.to_string()))?;

        let mut session = self.gateway.connect().await?;
        let inserted = session
            .execute(
                sqlx::query("INSERT INTO accounts (username, password_hash) VALUES ($1, $2)")
                    .bind(username.as_str())
                    .bind(&hash),
            )
            .await;

        match inserted {
            Ok(_) => {}
            Err(DbError::Sqlx(sqlx::Error::Database(e)))
                if e.code().as_deref() == Some(UNIQUE_VIOLATION) =>
            {
                return Err(DbError::Conflict {
                    resource: "account",
                    id: username.as_str().to_owned(),
                });
            }
            Err(e) => return Err(e),
        }

        session.commit().await?;
        tracing::info!(username = username.as_str(), "account created");
        Ok(())
    }

    /// Verify credentials.
    ///
    /// Returns the username only when exactly one account row matches and its
    /// stored hash verifies. Anything else is `None`.
    pub async fn authenticate(
        &self,
        username: &Username,
        password: &Password,
    ) -> Result<Option<String>, DbError> {
        let mut session = self.gateway.connect().await?;
        let rows = session
            .run_query(
                sqlx::query("SELECT username, password_hash FROM accounts WHERE username = $1")
                    .bind(username.as_str()),
            )
            .await?;
        session.commit().await?;

        let [row] = rows.as_slice() else {
            tracing::debug!(matches = rows.len(), "login rejected: no unique account");
            return Ok(None);
        };

        let stored: String = row.try_get("password_hash")?;
        if !password.verify(&stored) {
            tracing::debug!("login rejected: password mismatch");
            return Ok(None);
        }

        Ok(Some(row.try_get("username")?))
    }
}
