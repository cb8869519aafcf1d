//! Tool Registry - frozen tool metadata for listing.
//!
//! The registry is built once at startup from the handler set and never
//! changes afterwards. Building it validates every descriptor, so a
//! malformed schema aborts the process instead of reaching a client.

use std::sync::Arc;

use rmcp::model::Tool;
use serde_json::Value;

use super::handler::ToolHandler;

// ============================================================================
// Tool Registry
// ============================================================================

/// Frozen, ordered collection of tool descriptors.
///
/// `list` hands out the same descriptors in the same order on every call;
/// clients may cache the result for the lifetime of the process.
pub struct ToolRegistry {
    tools: Vec<Tool>,
    names: Vec<&'static str>,
}

impl ToolRegistry {
    /// Build the registry from the handlers, keeping their order.
    ///
    /// # Panics
    ///
    /// Panics when a descriptor is malformed: the schema is not an object
    /// schema, a property misses its type or description, or `required`
    /// names a property the schema does not declare. These are programmer
    /// errors and must fail at startup.
    pub fn new(handlers: &[Arc<dyn ToolHandler>]) -> Self {
        let mut tools = Vec::with_capacity(handlers.len());
        let mut names = Vec::with_capacity(handlers.len());
        for handler in handlers {
            let tool = handler.descriptor();
            assert_eq!(
                tool.name,
                handler.name(),
                "tool '{}' descriptor disagrees with its handler name",
                handler.name()
            );
            validate_schema(handler.name(), &tool);
            tools.push(tool);
            names.push(handler.name());
        }
        Self { tools, names }
    }

    /// All tool descriptors, in registration order.
    pub fn list(&self) -> Vec<Tool> {
        self.tools.clone()
    }

    /// All tool names, in registration order.
    pub fn tool_names(&self) -> &[&'static str] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Check one descriptor's input schema for the shape clients rely on.
fn validate_schema(name: &str, tool: &Tool) {
    let schema = tool.input_schema.as_ref();
    assert_eq!(
        schema.get("type").and_then(Value::as_str),
        Some("object"),
        "tool '{}' input schema must have type \"object\"",
        name
    );

    let properties = match schema.get("properties").and_then(Value::as_object) {
        Some(properties) => properties,
        None => panic!("tool '{}' input schema has no properties object", name),
    };
    for (key, property) in properties {
        let property = match property.as_object() {
            Some(property) => property,
            None => panic!("tool '{}' property '{}' is not an object", name, key),
        };
        assert!(
            property.get("type").is_some_and(Value::is_string),
            "tool '{}' property '{}' has no type",
            name,
            key
        );
        assert!(
            property.get("description").is_some_and(Value::is_string),
            "tool '{}' property '{}' has no description",
            name,
            key
        );
    }

    if let Some(required) = schema.get("required") {
        let required = match required.as_array() {
            Some(required) => required,
            None => panic!("tool '{}' required list is not an array", name),
        };
        for entry in required {
            let key = match entry.as_str() {
                Some(key) => key,
                None => panic!("tool '{}' required list holds a non-string", name),
            };
            assert!(
                properties.contains_key(key),
                "tool '{}' requires undeclared property '{}'",
                name,
                key
            );
        }
    }
}
