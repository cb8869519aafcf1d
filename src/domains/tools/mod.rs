//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are executable functions that can be called by MCP clients to perform
//! specific actions or computations.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `handler.rs` - The trait every tool implements
//! - `registry.rs` - Frozen descriptor list for `list_tools`
//! - `dispatcher.rs` - Name-based routing for `call_tool`
//! - `args.rs` - Shared argument extraction and date parsing
//! - `schema.rs` - Input schema builder
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Implement `ToolHandler` with a `NAME` const and a descriptor
//! 3. Export it in `definitions/mod.rs` and append it to `builtin_handlers`
//!
//! **No need to modify `server.rs`!** The registry and dispatcher are built
//! from the handler list.

pub mod args;
pub mod definitions;
mod dispatcher;
mod error;
mod handler;
mod registry;
pub mod schema;

pub use dispatcher::Dispatcher;
pub use error::ToolError;
pub use handler::ToolHandler;
pub use registry::ToolRegistry;
