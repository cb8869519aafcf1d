//! Transport layer for the MCP server.
//!
//! The server speaks MCP over standard input/output; rmcp owns the wire
//! protocol and the connection lifecycle. This module only wires the
//! handler to the transport and maps failures into typed errors.

mod error;
mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
