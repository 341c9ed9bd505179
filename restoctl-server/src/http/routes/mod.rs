//! Route handlers organized by resource

pub mod health;
pub mod login;
pub mod reservations;
pub mod menu;
pub mod orders;

use serde::Serialize;

/// `{"success": "..."}` acknowledgement body
#[derive(Debug, Serialize)]
pub struct Success {
    pub success: &'static str,
}
