//! Schema migrations
//!
//! Idempotent `CREATE ... IF NOT EXISTS` statements, applied inside one
//! session so a partial failure leaves the schema untouched.

use super::gateway::{DbError, Gateway};

const TABLES: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS accounts (
        username TEXT PRIMARY KEY,
        password_hash TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS reservations (
        id BIGSERIAL PRIMARY KEY,
        res_date DATE NOT NULL,
        res_time TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS menu_items (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        price NUMERIC(10, 2) NOT NULL CHECK (price >= 0),
        nutrition_info TEXT NOT NULL DEFAULT '',
        menu_status BOOLEAN NOT NULL DEFAULT TRUE
    )
    "#,
];

const INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_reservations_date ON reservations(res_date)",
    "CREATE INDEX IF NOT EXISTS idx_menu_items_active ON menu_items(id) WHERE menu_status",
];

/// Run all migrations
pub async fn run(gateway: &Gateway) -> Result<(), DbError> {
    tracing::info!("Running migrations...");

    let mut session = gateway.connect().await?;
    for statement in TABLES.iter().chain(INDEXES) {
        session.execute(sqlx::query(statement)).await?;
    }
    session.commit().await?;

    tracing::info!("Migrations complete");
    Ok(())
}
