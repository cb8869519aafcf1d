//! Input schema construction for tool descriptors.
//!
//! Schemas are authored by hand so the advertised wire shape is exactly
//! `{"type": "object", "properties": {...}, "required": [...]}`, with
//! the `required` key omitted when no argument is required. Registry
//! construction re-checks every schema against this shape.

use rmcp::model::JsonObject;
use serde_json::{Map, Value, json};
use std::sync::Arc;

/// JSON type of a single schema property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    String,
    Integer,
    Boolean,
}

impl PropertyKind {
    fn type_name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
        }
    }
}

/// Builder for a tool's object-shaped input schema.
#[derive(Debug, Default)]
pub struct ObjectSchema {
    properties: Map<String, Value>,
    required: Vec<String>,
}

impl ObjectSchema {
    /// Create an empty schema, for a tool that takes no arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a required property.
    pub fn required_property(mut self, name: &str, kind: PropertyKind, description: &str) -> Self {
        self.required.push(name.to_string());
        self.push(name, kind, description);
        self
    }

    /// Add an optional property.
    pub fn property(mut self, name: &str, kind: PropertyKind, description: &str) -> Self {
        self.push(name, kind, description);
        self
    }

    fn push(&mut self, name: &str, kind: PropertyKind, description: &str) {
        self.properties.insert(
            name.to_string(),
            json!({ "type": kind.type_name(), "description": description }),
        );
    }

    /// Freeze into the wire-shape schema object.
    pub fn into_input_schema(self) -> Arc<JsonObject> {
        let mut schema = Map::new();
        schema.insert("type".to_string(), Value::String("object".to_string()));
        schema.insert("properties".to_string(), Value::Object(self.properties));
        if !self.required.is_empty() {
            schema.insert(
                "required".to_string(),
                Value::Array(self.required.into_iter().map(Value::String).collect()),
            );
        }
        Arc::new(schema)
    }
}
