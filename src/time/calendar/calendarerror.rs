use chrono::NaiveDate;
use thiserror::Error;

/// Errors surfaced by holiday resolution and business-day arithmetic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// No holiday data for the requested year.
    #[error("year {year} is outside the supported range {min}-{max}")]
    UnsupportedYear { year: i32, min: i32, max: i32 },

    /// Malformed or non-existent calendar date, reported by the
    /// presentation layer before a date reaches the core.
    #[error("invalid calendar date: '{0}'")]
    InvalidDate(String),

    /// An inclusive range whose end precedes its start.
    #[error("end date {end} is earlier than start date {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}

pub type Result<T, E = CalendarError> = std::result::Result<T, E>;
