//! Tool dispatcher - routes calls to handlers by name.
//!
//! Every outcome becomes a `CallToolResult`. Handler errors are folded
//! into the result's `is_error` flag, so a tool call never fails the
//! underlying JSON-RPC request.

use std::collections::HashMap;
use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, JsonObject};
use tracing::warn;

use super::error::ToolError;
use super::handler::ToolHandler;

// ============================================================================
// Dispatcher
// ============================================================================

/// Name-indexed handler table, frozen at startup.
pub struct Dispatcher {
    handlers: HashMap<&'static str, Arc<dyn ToolHandler>>,
}

impl Dispatcher {
    /// Index the handlers by name.
    ///
    /// # Panics
    ///
    /// Panics when two handlers claim the same name. That is a programmer
    /// error and must fail at startup.
    pub fn new(handlers: &[Arc<dyn ToolHandler>]) -> Self {
        let mut table = HashMap::with_capacity(handlers.len());
        for handler in handlers {
            let previous = table.insert(handler.name(), handler.clone());
            assert!(
                previous.is_none(),
                "duplicate tool name '{}'",
                handler.name()
            );
        }
        Self { handlers: table }
    }

    /// Route one call to its handler and fold the outcome into a result.
    pub async fn dispatch(&self, name: &str, args: &JsonObject) -> CallToolResult {
        let outcome = match self.handlers.get(name) {
            Some(handler) => handler.call(args).await,
            None => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::unknown_tool(name))
            }
        };
        match outcome {
            Ok(content) => CallToolResult::success(content),
            Err(error) => {
                warn!("Tool {} failed: {}", name, error);
                CallToolResult::error(vec![Content::text(format!("Error: {}", error))])
            }
        }
    }
}
