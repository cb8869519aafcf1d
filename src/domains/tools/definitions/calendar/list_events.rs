//! List events tool definition.
//!
//! Lists calendar events in a date range, optionally restricted to one
//! calendar. The end date is inclusive.

use std::sync::Arc;

use chrono::Duration;
use rmcp::model::{Content, JsonObject, Tool, ToolAnnotations};
use tracing::info;

use crate::core::access::{AccessGrants, Capability};
use crate::domains::calendar::{CalendarEvent, CalendarStore};
use crate::domains::tools::args::{optional_str, parse_date, require_str_many};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::handler::ToolHandler;
use crate::domains::tools::schema::{ObjectSchema, PropertyKind};

/// Lists events between two dates.
pub struct ListEventsTool {
    store: Arc<dyn CalendarStore>,
    grants: Arc<AccessGrants>,
}

impl ListEventsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "calendar_list_events";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List calendar events in a date range";

    pub fn new(store: Arc<dyn CalendarStore>, grants: Arc<AccessGrants>) -> Self {
        Self { store, grants }
    }
}

#[async_trait::async_trait]
impl ToolHandler for ListEventsTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn descriptor(&self) -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: ObjectSchema::new()
                .required_property(
                    "start_date",
                    PropertyKind::String,
                    "ISO 8601 start date (e.g. 2026-02-21)",
                )
                .required_property("end_date", PropertyKind::String, "ISO 8601 end date (inclusive)")
                .property("calendar", PropertyKind::String, "Calendar name filter (optional)")
                .into_input_schema(),
            annotations: Some(ToolAnnotations {
                read_only_hint: Some(true),
                ..Default::default()
            }),
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    async fn call(&self, args: &JsonObject) -> Result<Vec<Content>, ToolError> {
        self.grants.check(Capability::Calendar)?;

        let [start_raw, end_raw] = require_str_many(args, ["start_date", "end_date"])?;
        let calendar = optional_str(args, "calendar")?;

        let start = parse_date(start_raw)?;
        let end = parse_date(end_raw)?;
        // The end date is inclusive: extend the window one day past it.
        // At the far edge of chrono's range the bare end is kept instead.
        let window_end = end.checked_add_signed(Duration::days(1)).unwrap_or(end);

        let mut events = self.store.events_between(start, window_end, calendar).await?;
        events.sort_by_key(|e| e.start);

        info!(
            "listed {} events between {} and {}",
            events.len(),
            start_raw,
            end_raw
        );

        if events.is_empty() {
            return Ok(vec![Content::text(format!(
                "No events found in {} – {}.",
                start_raw, end_raw
            ))]);
        }

        let mut lines = vec![format!("Events from {} to {}:\n", start_raw, end_raw)];
        for event in &events {
            lines.push(format_event_line(event));
        }
        Ok(vec![Content::text(lines.join("\n"))])
    }
}

/// Render one event as a bullet line.
fn format_event_line(event: &CalendarEvent) -> String {
    let time = if event.all_day {
        event.start.format("%Y-%m-%d").to_string()
    } else {
        format!(
            "{} → {}",
            event.start.format("%Y-%m-%d %H:%M"),
            event.end.format("%Y-%m-%d %H:%M")
        )
    };
    let mut line = format!("• {} [{}] cal:{}", event.title, time, event.calendar);
    if let Some(location) = &event.location {
        if !location.is_empty() {
            line.push_str(&format!(" @ {}", location));
        }
    }
    line
}
