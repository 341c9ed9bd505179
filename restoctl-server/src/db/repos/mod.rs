//! Repository implementations for database access
//!
//! Each repository opens one gateway session per operation and commits it
//! before returning. Errors drop the session, which rolls back.

pub mod accounts;
pub mod reservations;
pub mod menu;

pub use accounts::AccountRepo;
pub use reservations::{Reservation, ReservationRepo};
pub use menu::{MenuItem, MenuRepo};
