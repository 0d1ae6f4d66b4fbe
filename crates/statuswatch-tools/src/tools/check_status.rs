//! `check_github_status` tool.

use async_trait::async_trait;

use statuswatch_monitor::MonitorEngine;
use statuswatch_protocols::error::ToolError;
use statuswatch_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult};

/// First line of every rendered status.
pub const STATUS_BANNER: &str = "GitHub Status:";

/// Polls the status page on demand and returns the summary.
pub struct CheckStatusTool {
    definition: ToolDefinition,
    engine: MonitorEngine,
}

impl CheckStatusTool {
    pub fn new(engine: MonitorEngine) -> Self {
        let definition = ToolDefinition::new(
            "check_github_status",
            "Check GitHub Status",
            "Get current GitHub service status",
        )
        .with_parameters_schema(serde_json::json!({ "type": "object" }));

        Self { definition, engine }
    }
}

#[async_trait]
impl Tool for CheckStatusTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        _params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let summary = self.engine.check_now().await;

        let structured = serde_json::to_value(&summary)
            .map_err(|e| ToolError::ExecutionFailed(e.to_string()))?;
        let pretty = serde_json::to_string_pretty(&summary)
            .map_err(|e| ToolError::ExecutionFailed(e.to_string()))?;

        Ok(ToolResult::success_json(
            format!("{}\n{}", STATUS_BANNER, pretty),
            structured,
        ))
    }
}
