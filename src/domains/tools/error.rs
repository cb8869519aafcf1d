//! Tool-specific error types.
//!
//! Every failure a tool call can produce funnels into [`ToolError`]. The
//! dispatcher renders it as an error-flagged result, so a bad call is
//! answered rather than tearing down the session.

use thiserror::Error;

use crate::core::access::Capability;
use crate::domains::calendar::CalendarError;
use crate::domains::contacts::ContactError;
use crate::domains::notifications::NotifyError;

/// Errors that can occur during tool calls.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool name is not registered.
    #[error("unknown tool {0}")]
    UnknownTool(String),

    /// A required argument is absent, mistyped, or unparseable.
    #[error("missing or invalid argument: {0}")]
    MissingArgument(String),

    /// A referenced record does not exist.
    #[error("{0} not found")]
    NotFound(String),

    /// Access to a capability was denied at startup.
    #[error("{capability} access denied: {reason}")]
    PermissionDenied {
        capability: Capability,
        reason: String,
    },

    /// Calendar store failure.
    #[error("calendar error: {0}")]
    Calendar(#[from] CalendarError),

    /// Contact store failure.
    #[error("contacts error: {0}")]
    Contacts(#[from] ContactError),

    /// Notification delivery failure.
    #[error("notification error: {0}")]
    Notify(#[from] NotifyError),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "missing or invalid argument" error.
    pub fn missing_argument(msg: impl Into<String>) -> Self {
        Self::MissingArgument(msg.into())
    }

    /// Create a new "not found" error.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }
}
