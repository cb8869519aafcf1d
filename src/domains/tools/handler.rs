//! The contract every tool implements.

use rmcp::model::{Content, JsonObject, Tool};

use super::error::ToolError;

/// A single callable tool.
///
/// Implementations describe themselves once (the descriptor is collected
/// at registration and never changes) and execute against borrowed
/// arguments. Handlers return domain content on success; every failure
/// is a [`ToolError`] for the dispatcher to render into the error
/// envelope.
#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync {
    /// Name the tool is registered and called under.
    fn name(&self) -> &'static str;

    /// Descriptor advertised to clients: name, description, input schema.
    fn descriptor(&self) -> Tool;

    /// Execute the tool against the given arguments.
    async fn call(&self, args: &JsonObject) -> Result<Vec<Content>, ToolError>;
}
