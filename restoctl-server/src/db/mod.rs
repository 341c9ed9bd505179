//! Database layer - connection pool, gateway, migrations and repositories
//!
//! # Design Principles
//!
//! - One bounded pool per process, never a connection per request
//! - One [`Session`] (pooled connection + transaction) per request
//! - Bound parameters only, no SQL string interpolation
//! - Rely on DB constraints, handle conflicts - no check-then-insert

pub mod gateway;
pub mod migrations;
pub mod pool;
pub mod repos;

pub use gateway::{DbError, Gateway, Session};
pub use pool::{create_lazy_pool, create_pool, create_pool_with_options, PoolConfig};
pub use repos::*;
