//! restoctl-server: restaurant management backend
//!
//! REST endpoints for login, reservations, menu items and orders, backed by
//! PostgreSQL through a pooled, transaction-per-request [`db::Gateway`].

pub mod db;
pub mod http;
pub mod models;
pub mod state;

pub use db::{DbError, Gateway, PoolConfig, Session};
pub use http::{build_router, run_server, ServerConfig, ServerError};
pub use state::AppState;
