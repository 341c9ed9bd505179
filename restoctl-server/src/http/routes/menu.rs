//! Menu endpoints
//!
//! Menu status has one setter. The add/remove endpoints are fixed-value
//! shorthands for it.

use axum::extract::State;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Success;
use crate::db::{MenuItem, MenuRepo};
use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::models::NewMenuItem;
use crate::state::AppState;

/// Create menu item request
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMenuItemRequest {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub nutrition_info: String,
}

/// Body of the add/remove shorthands
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemRef {
    pub menu_item: i64,
}

/// Set status request
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetStatusRequest {
    pub menu_item: i64,
    pub active: bool,
}

/// Menu item response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub nutrition_info: String,
    pub menu_status: bool,
}

impl From<MenuItem> for MenuItemResponse {
    fn from(m: MenuItem) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            price: m.price,
            nutrition_info: m.nutrition_info,
            menu_status: m.menu_status,
        }
    }
}

/// Full menu response
#[derive(Debug, Serialize)]
pub struct MenuResponse {
    pub menu: Vec<MenuItemResponse>,
}

/// POST /api/menu/create-item
async fn create_item(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateMenuItemRequest>,
) -> Result<Json<Success>, ApiError> {
    let item = NewMenuItem::new(&req.name, &req.description, req.price, &req.nutrition_info)?;
    MenuRepo::new(state.gateway()).create(&item).await?;
    Ok(Json(Success {
        success: "Item added",
    }))
}

/// GET /api/menu/get-menu
async fn get_menu(State(state): State<AppState>) -> Result<Json<MenuResponse>, ApiError> {
    let items = MenuRepo::new(state.gateway()).list().await?;
    Ok(Json(MenuResponse {
        menu: items.into_iter().map(MenuItemResponse::from).collect(),
    }))
}

async fn set_status(state: &AppState, id: i64, active: bool) -> Result<Json<Success>, ApiError> {
    MenuRepo::new(state.gateway()).set_active(id, active).await?;
    Ok(Json(Success {
        success: "Menu Item updated",
    }))
}

/// PUT /api/menu/item-status
async fn put_item_status(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<SetStatusRequest>,
) -> Result<Json<Success>, ApiError> {
    set_status(&state, req.menu_item, req.active).await
}

/// PUT /api/menu/add-item-to-active-menu
async fn add_to_active_menu(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<MenuItemRef>,
) -> Result<Json<Success>, ApiError> {
    set_status(&state, req.menu_item, true).await
}

/// PUT /api/menu/remove-item-from-active-menu
async fn remove_from_active_menu(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<MenuItemRef>,
) -> Result<Json<Success>, ApiError> {
    set_status(&state, req.menu_item, false).await
}

/// Menu routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/menu/create-item", post(create_item))
        .route("/api/menu/get-menu", get(get_menu))
        .route("/api/menu/item-status", put(put_item_status))
        .route("/api/menu/add-item-to-active-menu", put(add_to_active_menu))
        .route(
            "/api/menu/remove-item-from-active-menu",
            put(remove_from_active_menu),
        )
}
