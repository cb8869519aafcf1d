//! List calendars tool definition.

use std::sync::Arc;

use rmcp::model::{Content, JsonObject, Tool, ToolAnnotations};

use crate::core::access::{AccessGrants, Capability};
use crate::domains::calendar::CalendarStore;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::handler::ToolHandler;
use crate::domains::tools::schema::ObjectSchema;

/// Lists every calendar the store knows about.
pub struct ListCalendarsTool {
    store: Arc<dyn CalendarStore>,
    grants: Arc<AccessGrants>,
}

impl ListCalendarsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "calendar_list_calendars";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List all available calendars";

    pub fn new(store: Arc<dyn CalendarStore>, grants: Arc<AccessGrants>) -> Self {
        Self { store, grants }
    }
}

#[async_trait::async_trait]
impl ToolHandler for ListCalendarsTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn descriptor(&self) -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: ObjectSchema::new().into_input_schema(),
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

    async fn call(&self, _args: &JsonObject) -> Result<Vec<Content>, ToolError> {
        self.grants.check(Capability::Calendar)?;

        let calendars = self.store.calendars().await?;
        if calendars.is_empty() {
            return Ok(vec![Content::text("No calendars found.")]);
        }

        let lines: Vec<String> = calendars
            .iter()
            .map(|c| format!("• {} [{}]", c.name, c.kind.label()))
            .collect();
        Ok(vec![Content::text(format!("Calendars:\n{}", lines.join("\n")))])
    }
}
