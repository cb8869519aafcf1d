//! Contacts domain module.
//!
//! Defines the [`ContactStore`] capability interface together with the
//! two shipped implementations: a JSON-file-backed store and an
//! in-memory store for tests and embedding.

mod error;
mod file;
mod memory;
mod store;

pub use error::ContactError;
pub use file::FileContactStore;
pub use memory::MemoryContactStore;
pub use store::{ContactCard, ContactStore, LabeledValue};
