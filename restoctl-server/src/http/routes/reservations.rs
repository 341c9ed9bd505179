//! Reservation endpoints

use axum::extract::State;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use super::Success;
use crate::db::{Reservation, ReservationRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ValidId};
use crate::models::{ResTime, ReservationDate};
use crate::state::AppState;

/// Create reservation request
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    pub reservation_date: String,
    pub res_time: String,
}

/// Create reservation response
#[derive(Debug, Serialize)]
pub struct CreatedReservation {
    pub reservation_id: i64,
}

/// Delete reservation request
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteReservationRequest {
    pub reservation_id: i64,
}

/// Reservation response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub id: i64,
    pub reservation_date: String,
    pub reservation_time: String,
}

impl From<Reservation> for ReservationResponse {
    fn from(r: Reservation) -> Self {
        Self {
            id: r.id,
            reservation_date: r.date().to_string(),
            reservation_time: r.res_time,
        }
    }
}

/// POST /api/reservation/create
async fn create_reservation(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateReservationRequest>,
) -> Result<Json<CreatedReservation>, ApiError> {
    let date = ReservationDate::parse(&req.reservation_date)?;
    let time = ResTime::new(&req.res_time)?;

    let reservation_id = ReservationRepo::new(state.gateway()).create(date, &time).await?;
    Ok(Json(CreatedReservation { reservation_id }))
}

/// DELETE /api/reservation/delete
///
/// Deleting an unknown id still succeeds.
async fn delete_reservation(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<DeleteReservationRequest>,
) -> Result<Json<Success>, ApiError> {
    ReservationRepo::new(state.gateway())
        .delete(req.reservation_id)
        .await?;
    Ok(Json(Success {
        success: "Reservation deleted",
    }))
}

/// GET /api/reservation/{id}
async fn get_reservation(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<ReservationResponse>, ApiError> {
    let reservation = ReservationRepo::new(state.gateway()).get(id).await?;
    Ok(Json(ReservationResponse::from(reservation)))
}

/// Reservation routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/reservation/create", post(create_reservation))
        .route("/api/reservation/delete", delete(delete_reservation))
        .route("/api/reservation/{id}", get(get_reservation))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::http::routes::test_support::{live_app, offline_app, send, send_raw};

    #[tokio::test]
    async fn create_rejects_non_json() {
        let app = offline_app();
        let status = send_raw(
            &app,
            "POST",
            "/api/reservation/create",
            "text/plain",
            "25-12-2024 18:30",
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_rejects_empty_body() {
        let app = offline_app();
        let (status, body) = send(&app, "POST", "/api/reservation/create", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "bad_request");

        let (status, _) = send(&app, "POST", "/api/reservation/create", Some("{}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_rejects_bad_date() {
        let app = offline_app();
        let (status, body) = send(
            &app,
            "POST",
            "/api/reservation/create",
            Some(r#"{"reservationDate":"2024-12-25","resTime":"18:30"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "validation_error");

        let (status, _) = send(
            &app,
            "POST",
            "/api/reservation/create",
            Some(r#"{"reservationDate":"30-02-2024","resTime":"18:30"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn delete_rejects_missing_id() {
        let app = offline_app();
        let (status, _) = send(&app, "DELETE", "/api/reservation/delete", Some("{}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            &app,
            "DELETE",
            "/api/reservation/delete",
            Some(r#"{"reservationId":"seven"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn get_rejects_non_integer_id() {
        let app = offline_app();
        let (status, body) = send(&app, "GET", "/api/reservation/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "validation_error");
    }

    #[tokio::test]
    async fn store_outage_is_opaque_500() {
        let app = offline_app();
        let (status, body) = send(&app, "GET", "/api/reservation/1", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "internal_error");
        assert_eq!(body["message"], "an internal error occurred");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_get_delete() {
        let app = live_app().await;

        let (status, body) = send(
            &app,
            "POST",
            "/api/reservation/create",
            Some(r#"{"reservationDate":"25-12-2024","resTime":"18:30"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let id = body["reservation_id"].as_i64().unwrap();
        assert!(id > 0);

        let (status, body) = send(&app, "GET", &format!("/api/reservation/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], id);
        assert_eq!(body["reservationDate"], "25-12-2024");
        assert_eq!(body["reservationTime"], "18:30");

        let delete = format!(r#"{{"reservationId":{id}}}"#);
        let (status, body) = send(&app, "DELETE", "/api/reservation/delete", Some(&delete)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], "Reservation deleted");

        // Second delete of the same id still succeeds
        let (status, _) = send(&app, "DELETE", "/api/reservation/delete", Some(&delete)).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(&app, "GET", &format!("/api/reservation/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
