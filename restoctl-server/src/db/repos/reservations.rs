//! Reservation repository
//!
//! - create: INSERT ... RETURNING id (store-assigned surrogate key)
//! - get: point lookup, NotFound when absent
//! - delete: point delete, idempotent

use chrono::NaiveDate;
use sqlx::FromRow;

use crate::db::gateway::{DbError, Gateway};
use crate::models::{ResTime, ReservationDate};

/// Reservation record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Reservation {
    pub id: i64,
    pub res_date: NaiveDate,
    pub res_time: String,
}

impl Reservation {
    pub fn date(&self) -> ReservationDate {
        ReservationDate::from(self.res_date)
    }
}

/// Reservation repository
pub struct ReservationRepo<'a> {
    gateway: &'a Gateway,
}

impl<'a> ReservationRepo<'a> {
    pub fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// Insert a reservation, returning its new id.
    pub async fn create(&self, date: ReservationDate, time: &ResTime) -> Result<i64, DbError> {
        let mut session = self.gateway.connect().await?;
        let (id,): (i64,) = session
            .fetch_one_as(
                sqlx::query_as(
                    "INSERT INTO reservations (res_date, res_time) VALUES ($1, $2) RETURNING id",
                )
                .bind(date.as_naive())
                .bind(time.as_str()),
            )
            .await?;
        session.commit().await?;

        tracing::info!(reservation_id = id, date = %date, "reservation created");
        Ok(id)
    }

    /// Get a single reservation by id.
    pub async fn get(&self, id: i64) -> Result<Reservation, DbError> {
        let mut session = self.gateway.connect().await?;
        let reservation: Option<Reservation> = session
            .fetch_optional_as(
                sqlx::query_as("SELECT id, res_date, res_time FROM reservations WHERE id = $1")
                    .bind(id),
            )
            .await?;
        session.commit().await?;

        reservation.ok_or_else(|| DbError::NotFound {
            resource: "reservation",
            id: id.to_string(),
        })
    }

    /// Delete a reservation by id (idempotent).
    ///
    /// Returns the number of rows removed, 0 if it did not exist.
    pub async fn delete(&self, id: i64) -> Result<u64, DbError> {
        let mut session = self.gateway.connect().await?;
        let removed = session
            .execute(sqlx::query("DELETE FROM reservations WHERE id = $1").bind(id))
            .await?;
        session.commit().await?;

        tracing::info!(reservation_id = id, removed, "reservation deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests - run with DATABASE_URL set
    // cargo test -p restoctl-server -- --ignored

    async fn gateway() -> Gateway {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let gateway = Gateway::new(crate::db::create_pool(&url).await.unwrap());
        crate::db::migrations::run(&gateway).await.unwrap();
        gateway
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_get() {
        let gateway = gateway().await;
        let repo = ReservationRepo::new(&gateway);
        let date = ReservationDate::parse("25-12-2024").unwrap();
        let time = ResTime::new("18:30").unwrap();

        let id = repo.create(date, &time).await.unwrap();
        assert!(id > 0);

        let reservation = repo.get(id).await.unwrap();
        assert_eq!(reservation.id, id);
        assert_eq!(reservation.date().to_string(), "25-12-2024");
        assert_eq!(reservation.res_time, "18:30");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn missing_is_not_found() {
        let gateway = gateway().await;
        let err = ReservationRepo::new(&gateway).get(i64::MAX).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "reservation", .. }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn delete_is_idempotent() {
        let gateway = gateway().await;
        let repo = ReservationRepo::new(&gateway);
        let date = ReservationDate::parse("01-01-2025").unwrap();
        let id = repo.create(date, &ResTime::new("12:00").unwrap()).await.unwrap();

        assert_eq!(repo.delete(id).await.unwrap(), 1);
        assert_eq!(repo.delete(id).await.unwrap(), 0);
        assert!(matches!(repo.get(id).await, Err(DbError::NotFound { .. })));
    }
}
