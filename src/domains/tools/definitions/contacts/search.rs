//! Contact search tool definition.

use std::sync::Arc;

use rmcp::model::{Content, JsonObject, Tool, ToolAnnotations};
use tracing::info;

use crate::core::access::{AccessGrants, Capability};
use crate::domains::contacts::{ContactCard, ContactStore};
use crate::domains::tools::args::{optional_i64, require_str};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::handler::ToolHandler;
use crate::domains::tools::schema::{ObjectSchema, PropertyKind};

const DEFAULT_LIMIT: i64 = 10;
const MAX_LIMIT: i64 = 100;

/// Searches the address book.
pub struct SearchContactsTool {
    store: Arc<dyn ContactStore>,
    grants: Arc<AccessGrants>,
}

impl SearchContactsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "contacts_search";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search contacts by name, email, or phone number";

    pub fn new(store: Arc<dyn ContactStore>, grants: Arc<AccessGrants>) -> Self {
        Self { store, grants }
    }
}

#[async_trait::async_trait]
impl ToolHandler for SearchContactsTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn descriptor(&self) -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: ObjectSchema::new()
                .required_property(
                    "query",
                    PropertyKind::String,
                    "Name, email, or phone to search for",
                )
                .property("limit", PropertyKind::Integer, "Max results (default 10)")
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
        self.grants.check(Capability::Contacts)?;

        let query = require_str(args, "query")?;
        let limit = optional_i64(args, "limit")?
            .unwrap_or(DEFAULT_LIMIT)
            .clamp(1, MAX_LIMIT) as usize;

        let matches = self.store.search(query, limit).await?;
        info!("contact search '{}' returned {} results", query, matches.len());

        if matches.is_empty() {
            return Ok(vec![Content::text(format!(
                "No contacts found matching '{}'.",
                query
            ))]);
        }

        let mut lines = vec![format!("Contacts matching '{}':\n", query)];
        for card in &matches {
            lines.push(format_result_line(card));
        }
        Ok(vec![Content::text(lines.join("\n"))])
    }
}

/// Render one search hit as a bullet line.
fn format_result_line(card: &ContactCard) -> String {
    let mut line = format!("• {}", card.name);
    if let Some(organization) = &card.organization {
        line.push_str(&format!(" ({})", organization));
    }
    if !card.emails.is_empty() {
        let values: Vec<&str> = card.emails.iter().map(|e| e.value.as_str()).collect();
        line.push_str(&format!("  email: {}", values.join(", ")));
    }
    if !card.phones.is_empty() {
        let values: Vec<&str> = card.phones.iter().map(|p| p.value.as_str()).collect();
        line.push_str(&format!("  phone: {}", values.join(", ")));
    }
    line.push_str(&format!("  id: {}", card.id));
    line
}
