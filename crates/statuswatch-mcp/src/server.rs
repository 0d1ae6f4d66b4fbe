//! MCP request handling on top of the tool dispatcher.

use tracing::{debug, warn};

use statuswatch_protocols::tool::ToolContext;
use statuswatch_tools::ToolDispatcher;

use crate::protocol::{
    CallToolParams, McpError, McpMethod, McpRequest, McpResponse, McpToolResult, RequestId,
    PROTOCOL_VERSION,
};

/// Session label attached to tool calls arriving over MCP.
const SESSION_ID: &str = "mcp";

/// Name and version announced to clients.
#[derive(Debug, Clone)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

impl ServerInfo {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// Answers MCP requests.
pub struct McpServer {
    dispatcher: ToolDispatcher,
    info: ServerInfo,
}

impl McpServer {
    pub fn new(dispatcher: ToolDispatcher, info: ServerInfo) -> Self {
        Self { dispatcher, info }
    }

    /// Handle one request. Returns `None` for notifications.
    pub async fn handle(&self, request: McpRequest) -> Option<McpResponse> {
        let Some(id) = request.id.clone() else {
            debug!(method = %request.method, "Notification received");
            return None;
        };

        let response = match McpMethod::parse(&request.method) {
            Some(McpMethod::Initialize) => McpResponse::success(id, self.initialize_result()),
            Some(McpMethod::Ping) => McpResponse::success(id, serde_json::json!({})),
            Some(McpMethod::ListTools) => McpResponse::success(id, self.list_tools_result()),
            Some(McpMethod::CallTool) => self.call_tool(id, request.params).await,
            Some(McpMethod::Initialized) | None => {
                debug!(method = %request.method, "Method not found");
                McpResponse::error(
                    Some(id),
                    McpError::method_not_found().with_data(serde_json::json!(request.method)),
                )
            }
        };
        Some(response)
    }

    fn initialize_result(&self) -> serde_json::Value {
        serde_json::json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": { "tools": {} },
            "serverInfo": {
                "name": self.info.name,
                "version": self.info.version
            }
        })
    }

    fn list_tools_result(&self) -> serde_json::Value {
        let tools: Vec<_> = self
            .dispatcher
            .list_tools()
            .iter()
            .map(|d| d.to_mcp_tool())
            .collect();
        serde_json::json!({ "tools": tools })
    }

    async fn call_tool(&self, id: RequestId, params: Option<serde_json::Value>) -> McpResponse {
        let params = match params.map(serde_json::from_value::<CallToolParams>) {
            Some(Ok(params)) => params,
            Some(Err(e)) => {
                return McpResponse::error(
                    Some(id),
                    McpError::invalid_params().with_data(serde_json::json!(e.to_string())),
                );
            }
            None => return McpResponse::error(Some(id), McpError::invalid_params()),
        };

        let ctx = ToolContext::new(SESSION_ID).with_correlation_id(id.to_string());
        let arguments = params.arguments.unwrap_or(serde_json::Value::Null);

        let result = match self.dispatcher.call_tool(&params.name, arguments, ctx).await {
            Ok(result) if result.success => {
                let mcp = McpToolResult::text(result.text());
                match result.structured_output {
                    Some(value) => mcp.with_structured(value),
                    None => mcp,
                }
            }
            Ok(result) => McpToolResult::error(result.text()),
            Err(e) => {
                warn!(tool = %params.name, error = %e, "Tool call failed");
                McpToolResult::error(e.to_string())
            }
        };

        match serde_json::to_value(&result) {
            Ok(value) => McpResponse::success(id, value),
            Err(e) => McpResponse::error(
                Some(id),
                McpError::internal_error().with_data(serde_json::json!(e.to_string())),
            ),
        }
    }
}

#[cfg(test)]
#[path = "server_tests.rs"]
mod tests;
