//! Calendar domain module.
//!
//! Defines the [`CalendarStore`] capability interface together with the
//! two shipped implementations: a JSON-file-backed store and an
//! in-memory store for tests and embedding.

mod error;
mod file;
mod memory;
mod store;

pub use error::CalendarError;
pub use file::FileCalendarStore;
pub use memory::MemoryCalendarStore;
pub use store::{CalendarEvent, CalendarInfo, CalendarKind, CalendarStore, EventDraft};
