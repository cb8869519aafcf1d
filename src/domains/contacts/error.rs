//! Contact store error types.

use thiserror::Error;

/// Errors produced by contact store implementations.
#[derive(Debug, Error)]
pub enum ContactError {
    /// Reading the backing store failed.
    #[error("store i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// The backing document could not be parsed.
    #[error("store document invalid: {0}")]
    Corrupt(#[from] serde_json::Error),
}
