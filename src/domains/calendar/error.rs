//! Calendar store error types.

use thiserror::Error;

/// Errors produced by calendar store implementations.
#[derive(Debug, Error)]
pub enum CalendarError {
    /// Reading or writing the backing store failed.
    #[error("store i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// The backing document could not be parsed.
    #[error("store document invalid: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// The store has no calendar to write into.
    #[error("no default calendar configured")]
    NoDefaultCalendar,
}
