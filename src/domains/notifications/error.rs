//! Notification error types.

use thiserror::Error;

/// Errors produced when delivering a notification.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The helper process could not be started.
    #[error("failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The helper process exited non-zero.
    #[error("{command} failed: {stderr}")]
    CommandFailed { command: String, stderr: String },
}

impl NotifyError {
    /// Create a spawn error.
    pub fn spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::Spawn {
            command: command.into(),
            source,
        }
    }

    /// Create a command failure error.
    pub fn command_failed(command: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self::CommandFailed {
            command: command.into(),
            stderr: stderr.into(),
        }
    }
}
