//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server,
//! including error handling, configuration, capability access bootstrap,
//! server lifecycle management, and the transport layer.

pub mod access;
pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use access::{AccessGrants, AccessStatus, Capability};
pub use config::Config;
pub use error::{Error, Result};
pub use server::OrganizerServer;
pub use transport::StdioTransport;
