//! Reservation date and time validation
//!
//! Dates travel on the wire as `DD-MM-YYYY` and are parsed strictly:
//! two-digit day, two-digit month, four-digit year, and a real calendar day.
//! Times are wall-clock strings kept exactly as the client sent them.

use std::fmt;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use super::validation::ValidationError;

/// Wire format for reservation dates
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Maximum length for reservation times
const MAX_TIME_LEN: usize = 32;

static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}-\d{2}-\d{4}$").expect("invalid date regex"));

/// Validated reservation date
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReservationDate(NaiveDate);

impl ReservationDate {
    /// Parse a `DD-MM-YYYY` date.
    ///
    /// # Example
    /// ```
    /// use restoctl_server::models::ReservationDate;
    ///
    /// assert!(ReservationDate::parse("25-12-2024").is_ok());
    /// assert!(ReservationDate::parse("2024-12-25").is_err());
    /// assert!(ReservationDate::parse("31-02-2024").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty {
                field: "reservationDate",
            });
        }

        if !DATE_RE.is_match(s) {
            return Err(ValidationError::InvalidFormat {
                field: "reservationDate",
                reason: "expected DD-MM-YYYY",
            });
        }

        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidFormat {
                field: "reservationDate",
                reason: "not a valid calendar date",
            })
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for ReservationDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for ReservationDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// Reservation wall-clock time, stored as provided
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResTime(String);

impl ResTime {
    /// Blank times are rejected; anything else is kept byte-for-byte.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.trim().is_empty() {
            return Err(ValidationError::Empty { field: "resTime" });
        }
        if s.chars().count() > MAX_TIME_LEN {
            return Err(ValidationError::TooLong {
                field: "resTime",
                max: MAX_TIME_LEN,
            });
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
