//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the tools domain.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! At startup the handler list is turned into a frozen `ToolRegistry` (what
//! `list_tools` returns) and a `Dispatcher` (what `call_tool` routes
//! through). The protocol surface stays at exactly these two methods;
//! everything else is left to rmcp's defaults.
//!
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::access::AccessGrants;
use super::config::Config;
use crate::domains::calendar::CalendarStore;
use crate::domains::contacts::ContactStore;
use crate::domains::notifications::Notifier;
use crate::domains::tools::definitions::builtin_handlers;
use crate::domains::tools::{Dispatcher, ToolRegistry};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and routes
/// tool listing and tool calls to the frozen registry and dispatcher.
#[derive(Clone)]
pub struct OrganizerServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Frozen tool metadata for `list_tools`.
    registry: Arc<ToolRegistry>,

    /// Name-based routing for `call_tool`.
    dispatcher: Arc<Dispatcher>,
}

impl OrganizerServer {
    /// Create a new MCP server over the given capability implementations.
    pub fn new(
        config: Config,
        calendar: Arc<dyn CalendarStore>,
        contacts: Arc<dyn ContactStore>,
        notifier: Arc<dyn Notifier>,
        grants: Arc<AccessGrants>,
    ) -> Self {
        let handlers = builtin_handlers(calendar, contacts, notifier, grants);
        let registry = Arc::new(ToolRegistry::new(&handlers));
        let dispatcher = Arc::new(Dispatcher::new(&handlers));
        info!("Registered {} tools", registry.len());

        Self {
            config: Arc::new(config),
            registry,
            dispatcher,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Number of registered tools.
    pub fn tool_count(&self) -> usize {
        self.registry.len()
    }
}

impl ServerHandler for OrganizerServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Provides calendar, contact, and desktop notification tools backed by \
                 local stores."
                    .to_string(),
            ),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    // The registry is frozen at startup.
                    list_changed: Some(false),
                }),
                ..Default::default()
            },
            server_info: Implementation {
                name: self.config.server.name.clone(),
                title: Some("Calendar, Contacts & Notifications".to_string()),
                version: self.config.server.version.clone(),
                icons: None,
                website_url: None,
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.registry.list(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, request, _context))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        info!("Calling tool: {}", request.name);
        let args = request.arguments.unwrap_or_default();
        Ok(self.dispatcher.dispatch(&request.name, &args).await)
    }
}
