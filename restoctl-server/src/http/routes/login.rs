//! Login endpoints
//!
//! Credentials are checked against salted argon2 hashes. The path form is
//! kept for existing clients; the JSON form keeps passwords out of URLs.

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::db::AccountRepo;
use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::models::{Password, Username};
use crate::state::AppState;

/// Login request body
#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub username: String,
}

async fn authenticate(
    state: &AppState,
    username: &str,
    password: &str,
) -> Result<Json<LoginResponse>, ApiError> {
    // Credentials that could never have been stored simply don't match
    let (Ok(username), Ok(password)) = (Username::new(username), Password::new(password)) else {
        return Err(ApiError::InvalidCredentials);
    };

    match AccountRepo::new(state.gateway())
        .authenticate(&username, &password)
        .await?
    {
        Some(username) => Ok(Json(LoginResponse { username })),
        None => Err(ApiError::InvalidCredentials),
    }
}

/// GET /api/login/{username}/{password}
async fn login_path(
    State(state): State<AppState>,
    Path((username, password)): Path<(String, String)>,
) -> Result<Json<LoginResponse>, ApiError> {
    authenticate(&state, &username, &password).await
}

/// POST /api/login
async fn login_body(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    authenticate(&state, &req.username, &req.password).await
}

/// Login routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/login", post(login_body))
        .route("/api/login/{username}/{password}", get(login_path))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::db::AccountRepo;
    use crate::http::routes::test_support::{live_app, offline_app, send, send_raw};
    use crate::models::{Password, Username};

    #[tokio::test]
    async fn body_login_rejects_non_json() {
        let app = offline_app();
        let status = send_raw(&app, "POST", "/api/login", "text/plain", "alice:pw").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn body_login_empty_password_is_no_match() {
        let app = offline_app();
        let (status, body) = send(
            &app,
            "POST",
            "/api/login",
            Some(r#"{"username":"alice","password":""}"#),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
    }

    #[tokio::test]
    async fn oversized_credentials_are_no_match() {
        let app = offline_app();

        let long_name = "a".repeat(65);
        let (status, body) = send(&app, "GET", &format!("/api/login/{long_name}/pw"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");

        let long_password = "p".repeat(257);
        let body = format!(r#"{{"username":"alice","password":"{long_password}"}}"#);
        let (status, body) = send(&app, "POST", "/api/login", Some(&body)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn path_login_round_trip() {
        let app = live_app().await;

        let url = std::env::var("DATABASE_URL").unwrap();
        let gateway = crate::db::Gateway::new(crate::db::create_pool(&url).await.unwrap());
        let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
        let name = format!("host-{nanos}");
        AccountRepo::new(&gateway)
            .create(&Username::new(&name).unwrap(), &Password::new("pw123").unwrap())
            .await
            .unwrap();

        let (status, body) = send(&app, "GET", &format!("/api/login/{name}/pw123"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["username"], name.as_str());

        let (status, _) = send(&app, "GET", &format!("/api/login/{name}/nope"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let body = format!(r#"{{"username":"{name}","password":"pw123"}}"#);
        let (status, _) = send(&app, "POST", "/api/login", Some(&body)).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn unknown_account_is_404() {
        let app = live_app().await;
        let (status, body) = send(&app, "GET", "/api/login/ghost-user/pw", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
    }
}
