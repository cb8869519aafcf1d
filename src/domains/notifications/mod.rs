//! Notifications domain module.
//!
//! Defines the [`Notifier`] capability interface, the command-line
//! notifier that shells out to the platform helper, and an in-memory
//! notifier that records instead of delivering.

mod command;
mod error;
mod memory;
mod notifier;

pub use command::CommandNotifier;
pub use error::NotifyError;
pub use memory::MemoryNotifier;
pub use notifier::{Notification, Notifier};
