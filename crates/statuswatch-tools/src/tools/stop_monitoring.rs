//! `stop_monitoring` tool.

use async_trait::async_trait;
use tracing::info;

use statuswatch_monitor::MonitorEngine;
use statuswatch_protocols::error::ToolError;
use statuswatch_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult};

/// Stops the polling loop. Idempotent.
pub struct StopMonitoringTool {
    definition: ToolDefinition,
    engine: MonitorEngine,
}

impl StopMonitoringTool {
    pub fn new(engine: MonitorEngine) -> Self {
        let definition = ToolDefinition::new(
            "stop_monitoring",
            "Stop GitHub Status Monitoring",
            "Stop periodic monitoring of GitHub status",
        )
        .with_parameters_schema(serde_json::json!({ "type": "object" }));

        Self { definition, engine }
    }
}

#[async_trait]
impl Tool for StopMonitoringTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        _params: serde_json::Value,
        ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let was_running = self.engine.stop();
        info!(correlation_id = %ctx.correlation_id, was_running, "stop_monitoring handled");

        Ok(ToolResult::success("Stopped GitHub status monitoring"))
    }
}
