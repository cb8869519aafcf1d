//! Calendar tool definitions.

mod create_event;
mod list_calendars;
mod list_events;

pub use create_event::CreateEventTool;
pub use list_calendars::ListCalendarsTool;
pub use list_events::ListEventsTool;
