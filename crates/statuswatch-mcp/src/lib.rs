//! MCP (Model Context Protocol) server for statuswatch.
//!
//! Exposes the registered tools to an MCP client over newline-delimited
//! JSON-RPC on stdio.

mod protocol;
mod server;
mod transport;

pub use protocol::{
    CallToolParams, McpContent, McpError, McpMethod, McpRequest, McpResponse, McpToolResult,
    RequestId, PROTOCOL_VERSION,
};
pub use server::{McpServer, ServerInfo};
pub use transport::{StdioTransport, TransportError};
