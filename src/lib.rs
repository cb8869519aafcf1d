//! Organizer MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server exposing
//! calendar, contact, and desktop notification tools over stdio.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   the capability access bootstrap, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **calendar**: Calendar store capability and its implementations
//!   - **contacts**: Contact store capability and its implementations
//!   - **notifications**: Notification delivery capability
//!   - **tools**: The MCP tools clients call, plus registry and dispatcher
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use organizer_mcp_server::core::access::AccessGrants;
//! use organizer_mcp_server::core::{Config, OrganizerServer, StdioTransport};
//! use organizer_mcp_server::domains::calendar::MemoryCalendarStore;
//! use organizer_mcp_server::domains::contacts::MemoryContactStore;
//! use organizer_mcp_server::domains::notifications::MemoryNotifier;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let server = OrganizerServer::new(
//!         Config::from_env(),
//!         Arc::new(MemoryCalendarStore::new()),
//!         Arc::new(MemoryContactStore::new()),
//!         Arc::new(MemoryNotifier::new()),
//!         Arc::new(AccessGrants::granted()),
//!     );
//!     StdioTransport::run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{AccessGrants, Config, Error, OrganizerServer, Result};
