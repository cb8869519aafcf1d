//! JSON-file-backed contact store.
//!
//! Read-only: the tools only search and fetch contacts, so the document
//! is never written back. A missing file is an empty address book.

use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::error::ContactError;
use super::store::{ContactCard, ContactStore};
use crate::core::access::AccessStatus;

/// On-disk document layout.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ContactDocument {
    #[serde(default)]
    contacts: Vec<ContactCard>,
}

/// Contact store persisted as a single JSON file.
pub struct FileContactStore {
    path: PathBuf,
    io: Mutex<()>,
}

impl FileContactStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            io: Mutex::new(()),
        }
    }

    fn load(&self) -> Result<ContactDocument, ContactError> {
        if !self.path.exists() {
            return Ok(ContactDocument::default());
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[async_trait]
impl ContactStore for FileContactStore {
    async fn request_access(&self) -> AccessStatus {
        AccessStatus::probe_path(&self.path)
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<ContactCard>, ContactError> {
        let _guard = self.io.lock().unwrap_or_else(PoisonError::into_inner);
        let document = self.load()?;
        Ok(document
            .contacts
            .into_iter()
            .filter(|c| c.matches(query))
            .take(limit)
            .collect())
    }

    async fn get(&self, id: &str) -> Result<Option<ContactCard>, ContactError> {
        let _guard = self.io.lock().unwrap_or_else(PoisonError::into_inner);
        let document = self.load()?;
        Ok(document.contacts.into_iter().find(|c| c.id == id))
    }
}
