//! In-memory contact store.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use super::error::ContactError;
use super::store::{ContactCard, ContactStore};
use crate::core::access::AccessStatus;

/// Contact store holding everything in process memory.
pub struct MemoryContactStore {
    contacts: RwLock<Vec<ContactCard>>,
}

impl MemoryContactStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            contacts: RwLock::new(Vec::new()),
        }
    }

    /// Create a store pre-populated with the given contacts.
    pub fn with_contacts(contacts: Vec<ContactCard>) -> Self {
        Self {
            contacts: RwLock::new(contacts),
        }
    }

    /// Add a contact.
    pub fn insert(&self, card: ContactCard) {
        self.contacts
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(card);
    }
}

impl Default for MemoryContactStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactStore for MemoryContactStore {
    async fn request_access(&self) -> AccessStatus {
        AccessStatus::Granted
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<ContactCard>, ContactError> {
        let contacts = self.contacts.read().unwrap_or_else(PoisonError::into_inner);
        Ok(contacts
            .iter()
            .filter(|c| c.matches(query))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn get(&self, id: &str) -> Result<Option<ContactCard>, ContactError> {
        let contacts = self.contacts.read().unwrap_or_else(PoisonError::into_inner);
        Ok(contacts.iter().find(|c| c.id == id).cloned())
    }
}
