//! Order endpoint
//!
//! Orders are accepted and logged but not persisted.
// TODO: hand accepted orders to a payment/fulfillment pipeline once one exists

use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;

use super::Success;
use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::state::AppState;

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.is_empty(),
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
    }
}

/// POST /api/order/create
async fn create_order(JsonBody(order): JsonBody<Value>) -> Result<Json<Success>, ApiError> {
    if is_empty(&order) {
        return Err(ApiError::malformed("order is empty"));
    }

    tracing::info!(%order, "order received");
    Ok(Json(Success {
        success: "Order was created",
    }))
}

/// Order routes
pub fn router() -> Router<AppState> {
    Router::new().route("/api/order/create", post(create_order))
}
