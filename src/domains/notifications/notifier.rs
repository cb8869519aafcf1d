//! Notification capability interface.

use async_trait::async_trait;

use super::error::NotifyError;
use crate::core::access::AccessStatus;

/// A desktop notification to deliver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub subtitle: Option<String>,
}

/// Notification delivery capability.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Report whether delivery is expected to work.
    ///
    /// Implementations that cannot know before the first send report
    /// [`AccessStatus::Deferred`].
    async fn request_access(&self) -> AccessStatus;

    /// Deliver a notification.
    async fn send(&self, notification: &Notification) -> Result<(), NotifyError>;
}
