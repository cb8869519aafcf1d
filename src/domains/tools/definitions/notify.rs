//! Notification tool definition.

use std::sync::Arc;

use rmcp::model::{Content, JsonObject, Tool};
use tracing::info;

use crate::core::access::{AccessGrants, Capability};
use crate::domains::notifications::{Notification, Notifier};
use crate::domains::tools::args::{optional_str, require_str_many};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::handler::ToolHandler;
use crate::domains::tools::schema::{ObjectSchema, PropertyKind};

/// Sends a desktop notification.
pub struct NotifyTool {
    notifier: Arc<dyn Notifier>,
    grants: Arc<AccessGrants>,
}

impl NotifyTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "notify";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Send a desktop system notification";

    pub fn new(notifier: Arc<dyn Notifier>, grants: Arc<AccessGrants>) -> Self {
        Self { notifier, grants }
    }
}

#[async_trait::async_trait]
impl ToolHandler for NotifyTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn descriptor(&self) -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: ObjectSchema::new()
                .required_property("title", PropertyKind::String, "Notification title")
                .required_property("body", PropertyKind::String, "Notification body text")
                .property("subtitle", PropertyKind::String, "Subtitle (optional)")
                .into_input_schema(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    async fn call(&self, args: &JsonObject) -> Result<Vec<Content>, ToolError> {
        self.grants.check(Capability::Notifications)?;

        let [title, body] = require_str_many(args, ["title", "body"])?;
        let subtitle = optional_str(args, "subtitle")?;

        let notification = Notification {
            title: title.to_string(),
            body: body.to_string(),
            subtitle: subtitle.map(str::to_string),
        };
        self.notifier.send(&notification).await?;

        info!("sent notification '{}'", title);
        Ok(vec![Content::text(format!("Notification '{}' sent.", title))])
    }
}
