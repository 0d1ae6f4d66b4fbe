//! Tool dispatch: lookup, validation and execution.

use std::sync::Arc;

use tracing::{debug, error, warn};

use statuswatch_protocols::error::ToolError;
use statuswatch_protocols::tool::{ToolContext, ToolDefinition, ToolResult};

use crate::registry::ToolRegistry;

/// Routes tool calls to registered tools.
#[derive(Clone)]
pub struct ToolDispatcher {
    registry: Arc<ToolRegistry>,
}

impl ToolDispatcher {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    /// Definitions of every registered tool, in registration order.
    pub fn list_tools(&self) -> Vec<ToolDefinition> {
        self.registry.list()
    }

    /// Look up, validate and execute a tool.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
        ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let result = self.execute(name, arguments, ctx).await;

        match result {
            Err(ref e) if e.is_rejection() => warn!(tool = name, error = %e, "Tool call rejected"),
            Err(ref e) => error!(tool = name, error = %e, "Tool execution failed"),
            Ok(_) => {}
        }
        result
    }

    async fn execute(
        &self,
        name: &str,
        arguments: serde_json::Value,
        ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let tool = self
            .registry
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;

        tool.validate(&arguments)?;

        debug!(tool = name, correlation_id = %ctx.correlation_id, "Executing tool");
        tool.execute(arguments, ctx).await
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
