//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod calendar;
pub mod contacts;
pub mod notify;

use std::sync::Arc;

use crate::core::access::AccessGrants;
use crate::domains::calendar::CalendarStore;
use crate::domains::contacts::ContactStore;
use crate::domains::notifications::Notifier;
use crate::domains::tools::handler::ToolHandler;

pub use calendar::{CreateEventTool, ListCalendarsTool, ListEventsTool};
pub use contacts::{GetContactTool, SearchContactsTool};
pub use notify::NotifyTool;

/// Build every built-in tool, in the order clients see them.
pub fn builtin_handlers(
    calendar: Arc<dyn CalendarStore>,
    contacts: Arc<dyn ContactStore>,
    notifier: Arc<dyn Notifier>,
    grants: Arc<AccessGrants>,
) -> Vec<Arc<dyn ToolHandler>> {
    vec![
        Arc::new(ListEventsTool::new(calendar.clone(), grants.clone())),
        Arc::new(CreateEventTool::new(calendar.clone(), grants.clone())),
        Arc::new(ListCalendarsTool::new(calendar, grants.clone())),
        Arc::new(SearchContactsTool::new(contacts.clone(), grants.clone())),
        Arc::new(GetContactTool::new(contacts, grants.clone())),
        Arc::new(NotifyTool::new(notifier, grants)),
    ]
}
