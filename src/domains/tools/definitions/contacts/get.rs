//! Contact detail tool definition.

use std::sync::Arc;

use rmcp::model::{Content, JsonObject, Tool, ToolAnnotations};

use crate::core::access::{AccessGrants, Capability};
use crate::domains::contacts::{ContactCard, ContactStore, LabeledValue};
use crate::domains::tools::args::require_str;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::handler::ToolHandler;
use crate::domains::tools::schema::{ObjectSchema, PropertyKind};

/// Shows the full card for one contact.
pub struct GetContactTool {
    store: Arc<dyn ContactStore>,
    grants: Arc<AccessGrants>,
}

impl GetContactTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "contacts_get";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get full details for a contact by identifier";

    pub fn new(store: Arc<dyn ContactStore>, grants: Arc<AccessGrants>) -> Self {
        Self { store, grants }
    }
}

#[async_trait::async_trait]
impl ToolHandler for GetContactTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn descriptor(&self) -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: ObjectSchema::new()
                .required_property(
                    "identifier",
                    PropertyKind::String,
                    "Contact identifier from contacts_search",
                )
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

        let id = require_str(args, "identifier")?;
        let card = self
            .store
            .get(id)
            .await?
            .ok_or_else(|| ToolError::not_found(format!("contact {}", id)))?;
        Ok(vec![Content::text(format_card(&card))])
    }
}

fn format_card(card: &ContactCard) -> String {
    let mut lines = vec![format!("Name: {}", card.name)];
    if let Some(organization) = &card.organization {
        lines.push(format!("Org: {}", organization));
    }
    push_fields(&mut lines, "Email", &card.emails);
    push_fields(&mut lines, "Phone", &card.phones);
    push_fields(&mut lines, "Address", &card.addresses);
    push_fields(&mut lines, "URL", &card.urls);
    if let Some(birthday) = &card.birthday {
        lines.push(format!("Birthday: {}", birthday));
    }
    if let Some(note) = &card.note {
        lines.push(format!("Note: {}", note));
    }
    lines.push(format!("ID: {}", card.id));
    lines.join("\n")
}

fn push_fields(lines: &mut Vec<String>, heading: &str, fields: &[LabeledValue]) {
    for field in fields {
        lines.push(format!(
            "{} ({}): {}",
            heading,
            field.label.as_deref().unwrap_or(""),
            field.value.replace('\n', ", ")
        ));
    }
}
