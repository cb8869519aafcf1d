//! Capability access bootstrap.
//!
//! Access to each backing capability is requested once at startup. The
//! outcome is recorded per capability and consulted by every handler
//! before the capability is touched, so a denied store answers calls
//! with one uniform message instead of leaking raw i/o errors mid-call.

use std::fmt;
use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::domains::calendar::CalendarStore;
use crate::domains::contacts::ContactStore;
use crate::domains::notifications::Notifier;
use crate::domains::tools::ToolError;

/// Outcome of requesting access to one capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessStatus {
    /// The capability answered the probe and is usable.
    Granted,
    /// The capability refused; calls against it fail with this reason.
    Denied(String),
    /// Usability is unknown until first use; calls proceed.
    Deferred,
}

impl AccessStatus {
    /// Probe whether a backing file could be read or created.
    ///
    /// An absent file passes as long as its directory exists or can be
    /// created.
    pub fn probe_path(path: &Path) -> Self {
        if path.exists() {
            if path.is_dir() {
                return Self::Denied(format!("{} is a directory", path.display()));
            }
            return match fs::OpenOptions::new().read(true).open(path) {
                Ok(_) => Self::Granted,
                Err(e) => Self::Denied(format!("cannot open {}: {}", path.display(), e)),
            };
        }
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => match fs::create_dir_all(parent) {
                Ok(()) => Self::Granted,
                Err(e) => Self::Denied(format!("cannot create {}: {}", parent.display(), e)),
            },
            _ => Self::Granted,
        }
    }
}

/// The capabilities this server mediates access to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Calendar,
    Contacts,
    Notifications,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Calendar => "calendar",
            Self::Contacts => "contacts",
            Self::Notifications => "notifications",
        };
        f.write_str(name)
    }
}

/// Per-capability outcomes of the startup access request.
#[derive(Debug, Clone)]
pub struct AccessGrants {
    calendar: AccessStatus,
    contacts: AccessStatus,
    notifications: AccessStatus,
}

impl AccessGrants {
    /// Request access to every capability and record the outcomes.
    pub async fn request(
        calendar: &dyn CalendarStore,
        contacts: &dyn ContactStore,
        notifier: &dyn Notifier,
    ) -> Self {
        let grants = Self {
            calendar: calendar.request_access().await,
            contacts: contacts.request_access().await,
            notifications: notifier.request_access().await,
        };
        grants.log_summary();
        grants
    }

    /// Grants with every capability granted.
    pub fn granted() -> Self {
        Self {
            calendar: AccessStatus::Granted,
            contacts: AccessStatus::Granted,
            notifications: AccessStatus::Granted,
        }
    }

    /// Replace one capability's status.
    pub fn with_status(mut self, capability: Capability, status: AccessStatus) -> Self {
        match capability {
            Capability::Calendar => self.calendar = status,
            Capability::Contacts => self.contacts = status,
            Capability::Notifications => self.notifications = status,
        }
        self
    }

    /// The recorded status for one capability.
    pub fn status(&self, capability: Capability) -> &AccessStatus {
        match capability {
            Capability::Calendar => &self.calendar,
            Capability::Contacts => &self.contacts,
            Capability::Notifications => &self.notifications,
        }
    }

    /// Fail fast when a capability was denied at startup.
    ///
    /// `Deferred` passes; the first real use reports its own failure.
    pub fn check(&self, capability: Capability) -> Result<(), ToolError> {
        match self.status(capability) {
            AccessStatus::Denied(reason) => Err(ToolError::PermissionDenied {
                capability,
                reason: reason.clone(),
            }),
            AccessStatus::Granted | AccessStatus::Deferred => Ok(()),
        }
    }

    fn log_summary(&self) {
        let all = [
            Capability::Calendar,
            Capability::Contacts,
            Capability::Notifications,
        ];
        for capability in all {
            match self.status(capability) {
                AccessStatus::Granted => info!("{} access granted", capability),
                AccessStatus::Deferred => info!("{} access deferred until first use", capability),
                AccessStatus::Denied(reason) => warn!("{} access denied: {}", capability, reason),
            }
        }
    }
}
