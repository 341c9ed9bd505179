//! Menu repository
//!
//! - create: INSERT, always active
//! - list: whole menu ordered by id
//! - set_active: single idempotent status setter

use rust_decimal::Decimal;
use sqlx::FromRow;

use crate::db::gateway::{DbError, Gateway};
use crate::models::NewMenuItem;

/// Menu item record from database
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub nutrition_info: String,
    pub menu_status: bool,
}

/// Menu repository
pub struct MenuRepo<'a> {
    gateway: &'a Gateway,
}

impl<'a> MenuRepo<'a> {
    pub fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// Insert a menu item on the active menu, returning its id.
    pub async fn create(&self, item: &NewMenuItem) -> Result<i64, DbError> {
        let mut session = self.gateway.connect().await?;
        let (id,): (i64,) = session
            .fetch_one_as(
                sqlx::query_as(
                    r#"
                    INSERT INTO menu_items (name, description, price, nutrition_info, menu_status)
                    VALUES ($1, $2, $3, $4, TRUE)
                    RETURNING id
                    "#,
                )
                .bind(item.name())
                .bind(item.description())
                .bind(item.price())
                .bind(item.nutrition_info()),
            )
            .await?;
        session.commit().await?;

        tracing::info!(menu_item_id = id, name = item.name(), "menu item created");
        Ok(id)
    }

    /// List every menu item, active or not.
    pub async fn list(&self) -> Result<Vec<MenuItem>, DbError> {
        let mut session = self.gateway.connect().await?;
        let items: Vec<MenuItem> = session
            .fetch_all_as(sqlx::query_as(
                r#"
                SELECT id, name, description, price, nutrition_info, menu_status
                FROM menu_items
                ORDER BY id
                "#,
            ))
            .await?;
        session.commit().await?;

        Ok(items)
    }

    /// Put an item on or take it off the active menu.
    ///
    /// Idempotent; returns rows affected (0 for an unknown id).
    pub async fn set_active(&self, id: i64, active: bool) -> Result<u64, DbError> {
        let mut session = self.gateway.connect().await?;
        let updated = session
            .execute(
                sqlx::query("UPDATE menu_items SET menu_status = $1 WHERE id = $2")
                    .bind(active)
                    .bind(id),
            )
            .await?;
        session.commit().await?;

        tracing::info!(menu_item_id = id, active, updated, "menu status set");
        Ok(updated)
    }
}
