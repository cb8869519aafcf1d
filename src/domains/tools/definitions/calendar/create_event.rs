//! Create event tool definition.

use std::sync::Arc;

use rmcp::model::{Content, JsonObject, Tool};
use tracing::info;

use crate::core::access::{AccessGrants, Capability};
use crate::domains::calendar::{CalendarStore, EventDraft};
use crate::domains::tools::args::{optional_bool, optional_str, parse_datetime, require_str_many};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::handler::ToolHandler;
use crate::domains::tools::schema::{ObjectSchema, PropertyKind};

/// Creates a new calendar event.
pub struct CreateEventTool {
    store: Arc<dyn CalendarStore>,
    grants: Arc<AccessGrants>,
}

impl CreateEventTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "calendar_create_event";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Create a new calendar event";

    pub fn new(store: Arc<dyn CalendarStore>, grants: Arc<AccessGrants>) -> Self {
        Self { store, grants }
    }
}

#[async_trait::async_trait]
impl ToolHandler for CreateEventTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn descriptor(&self) -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: ObjectSchema::new()
                .required_property("title", PropertyKind::String, "Event title")
                .required_property("start", PropertyKind::String, "ISO 8601 start datetime")
                .required_property("end", PropertyKind::String, "ISO 8601 end datetime")
                .property(
                    "calendar",
                    PropertyKind::String,
                    "Calendar name (uses default if omitted)",
                )
                .property("notes", PropertyKind::String, "Event notes (optional)")
                .property("location", PropertyKind::String, "Event location (optional)")
                .property("all_day", PropertyKind::Boolean, "All-day event (optional)")
                .into_input_schema(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    async fn call(&self, args: &JsonObject) -> Result<Vec<Content>, ToolError> {
        self.grants.check(Capability::Calendar)?;

        let [title, start_raw, end_raw] = require_str_many(args, ["title", "start", "end"])?;
        let calendar = optional_str(args, "calendar")?;
        let notes = optional_str(args, "notes")?;
        let location = optional_str(args, "location")?;
        let all_day = optional_bool(args, "all_day")?.unwrap_or(false);

        let draft = EventDraft {
            title: title.to_string(),
            start: parse_datetime(start_raw)?,
            end: parse_datetime(end_raw)?,
            calendar: calendar.map(str::to_string),
            all_day,
            location: location.map(str::to_string),
            notes: notes.map(str::to_string),
        };
        let created = self.store.create_event(draft).await?;

        info!("created event '{}' in calendar '{}'", created.title, created.calendar);
        Ok(vec![Content::text(format!(
            "Created event '{}' on {} in calendar '{}'",
            created.title, start_raw, created.calendar
        ))])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::calendar::MemoryCalendarStore;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn tool() -> (Arc<MemoryCalendarStore>, CreateEventTool) {
        let store = Arc::new(MemoryCalendarStore::new());
        let tool = CreateEventTool::new(store.clone(), Arc::new(AccessGrants::granted()));
        (store, tool)
    }

    fn args(value: serde_json::Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    fn text_of(content: &[Content]) -> &str {
        match &content[0].raw {
            rmcp::model::RawContent::Text(t) => &t.text,
            _ => panic!("expected text content"),
        }
    }

    #[tokio::test]
    async fn test_create_reports_title_and_calendar() {
        let (_, tool) = tool();
        let content = tool
            .call(&args(json!({
                "title": "Dentist",
                "start": "2026-03-05T14:00:00Z",
                "end": "2026-03-05T15:00:00Z"
            })))
            .await
            .unwrap();
        assert_eq!(
            text_of(&content),
            "Created event 'Dentist' on 2026-03-05T14:00:00Z in calendar 'Personal'"
        );
    }

    #[tokio::test]
    async fn test_created_event_is_listed_afterwards() {
        let (store, tool) = tool();
        tool.call(&args(json!({
            "title": "Standup",
            "start": "2026-03-05T09:00:00Z",
            "end": "2026-03-05T09:15:00Z",
            "location": "Room 2",
            "notes": "Bring updates"
        })))
        .await
        .unwrap();

        let window_start = Utc.with_ymd_and_hms(2026, 3, 5, 0, 0, 0).unwrap();
        let window_end = Utc.with_ymd_and_hms(2026, 3, 6, 0, 0, 0).unwrap();
        let events = store.events_between(window_start, window_end, None).await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].location.as_deref(), Some("Room 2"));
        assert_eq!(events[0].notes.as_deref(), Some("Bring updates"));
    }

    #[tokio::test]
    async fn test_unknown_calendar_falls_back_to_default() {
        let (_, tool) = tool();
        let content = tool
            .call(&args(json!({
                "title": "Lunch",
                "start": "2026-03-05T12:00:00Z",
                "end": "2026-03-05T13:00:00Z",
                "calendar": "Nope"
            })))
            .await
            .unwrap();
        assert!(text_of(&content).ends_with("in calendar 'Personal'"));
    }

    #[tokio::test]
    async fn test_missing_title_reported_alone() {
        let (store, tool) = tool();
        let err = tool
            .call(&args(json!({
                "start": "2026-03-05T14:00:00Z",
                "end": "2026-03-05T15:00:00Z"
            })))
            .await
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("title"));
        assert!(!msg.contains("start"));
        assert_eq!(store.event_count(), 0);
    }

    #[tokio::test]
    async fn test_date_without_time_is_rejected() {
        let (store, tool) = tool();
        let err = tool
            .call(&args(json!({
                "title": "Dentist",
                "start": "2026-03-05",
                "end": "2026-03-05T15:00:00Z"
            })))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("time component"));
        assert_eq!(store.event_count(), 0);
    }

    #[tokio::test]
    async fn test_mistyped_all_day_is_rejected() {
        let (store, tool) = tool();
        let err = tool
            .call(&args(json!({
                "title": "Dentist",
                "start": "2026-03-05T14:00:00Z",
                "end": "2026-03-05T15:00:00Z",
                "all_day": "yes"
            })))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("all_day"));
        assert_eq!(store.event_count(), 0);
    }

    #[tokio::test]
    async fn test_all_day_flag_round_trips() {
        let (store, tool) = tool();
        tool.call(&args(json!({
            "title": "Holiday",
            "start": "2026-03-05T00:00:00Z",
            "end": "2026-03-06T00:00:00Z",
            "all_day": true
        })))
        .await
        .unwrap();

        let window_start = Utc.with_ymd_and_hms(2026, 3, 5, 0, 0, 0).unwrap();
        let window_end = Utc.with_ymd_and_hms(2026, 3, 7, 0, 0, 0).unwrap();
        let events = store.events_between(window_start, window_end, None).await.unwrap();
        assert!(events[0].all_day);
    }
}
