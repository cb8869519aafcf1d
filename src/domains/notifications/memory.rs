//! In-memory notifier that records instead of delivering.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use super::error::NotifyError;
use super::notifier::{Notification, Notifier};
use crate::core::access::AccessStatus;

/// Notifier that keeps every sent notification in memory.
pub struct MemoryNotifier {
    sent: Mutex<Vec<Notification>>,
    failure: Option<String>,
}

impl MemoryNotifier {
    /// Create a notifier that accepts every send.
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    /// Create a notifier whose every send fails with the given reason.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failure: Some(reason.into()),
        }
    }

    /// Everything sent so far, in order.
    pub fn sent(&self) -> Vec<Notification> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for MemoryNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for MemoryNotifier {
    async fn request_access(&self) -> AccessStatus {
        AccessStatus::Granted
    }

    async fn send(&self, notification: &Notification) -> Result<(), NotifyError> {
        if let Some(reason) = &self.failure {
            return Err(NotifyError::command_failed("memory", reason.clone()));
        }
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification.clone());
        Ok(())
    }
}
