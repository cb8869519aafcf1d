//! Contact capability interface and its data types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::error::ContactError;
use crate::core::access::AccessStatus;

/// A labeled contact field, e.g. a "work" email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub value: String,
}

impl LabeledValue {
    /// Construct a field with a label.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            value: value.into(),
        }
    }

    /// Construct an unlabeled field.
    pub fn unlabeled(value: impl Into<String>) -> Self {
        Self {
            label: None,
            value: value.into(),
        }
    }
}

/// One address-book entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactCard {
    /// Stable identifier, the handle `contacts_get` looks up by.
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<LabeledValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phones: Vec<LabeledValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<LabeledValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<LabeledValue>,
    /// Display-ready birthday, e.g. `1990-04-12`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ContactCard {
    /// Case-insensitive substring match over name, emails, and phones.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self
                .emails
                .iter()
                .any(|e| e.value.to_lowercase().contains(&query))
            || self
                .phones
                .iter()
                .any(|p| p.value.to_lowercase().contains(&query))
    }
}

/// Address-book capability.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Probe whether the store is usable at all.
    async fn request_access(&self) -> AccessStatus;

    /// Contacts matching `query`, at most `limit` of them.
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<ContactCard>, ContactError>;

    /// Look up a single contact by its stable identifier.
    async fn get(&self, id: &str) -> Result<Option<ContactCard>, ContactError>;
}
