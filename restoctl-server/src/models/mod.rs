//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod credentials;
pub mod reservation;
pub mod menu;

pub use validation::ValidationError;
pub use credentials::{Password, Username};
pub use reservation::{ResTime, ReservationDate};
pub use menu::NewMenuItem;
