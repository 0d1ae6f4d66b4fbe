//! `start_monitoring` tool.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

use statuswatch_config::MonitorConfig;
use statuswatch_monitor::{MonitorEngine, StartOutcome};
use statuswatch_protocols::error::ToolError;
use statuswatch_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult};

/// Parameters for start_monitoring.
#[derive(Debug, Default, Deserialize)]
struct StartParams {
    /// Check interval in seconds. Whole-valued floats such as `30.0` are
    /// accepted.
    #[serde(default)]
    interval: Option<serde_json::Number>,
}

/// Starts periodic polling, or retunes the interval of a running monitor.
pub struct StartMonitoringTool {
    definition: ToolDefinition,
    engine: MonitorEngine,
    default_interval_secs: u64,
    min_interval_secs: u64,
}

impl StartMonitoringTool {
    pub fn new(engine: MonitorEngine, config: &MonitorConfig) -> Self {
        let definition = ToolDefinition::new(
            "start_monitoring",
            "Start GitHub Status Monitoring",
            "Start periodic monitoring of GitHub status",
        )
        .with_parameters_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "interval": {
                    "type": "integer",
                    "description": format!(
                        "Check interval in seconds (default: {})",
                        config.default_interval_secs
                    ),
                    "minimum": config.min_interval_secs
                }
            }
        }));

        Self {
            definition,
            engine,
            default_interval_secs: config.default_interval_secs,
            min_interval_secs: config.min_interval_secs,
        }
    }

    /// Resolve and validate the requested interval.
    fn interval_secs(&self, params: serde_json::Value) -> Result<u64, ToolError> {
        let params: StartParams = if params.is_null() {
            StartParams::default()
        } else {
            serde_json::from_value(params)
                .map_err(|e| ToolError::InvalidParameters(e.to_string()))?
        };

        let Some(number) = params.interval else {
            return Ok(self.default_interval_secs);
        };
        let requested = whole_seconds(&number).ok_or_else(|| {
            ToolError::InvalidParameters(format!(
                "interval must be a whole number of seconds, got {}",
                number
            ))
        })?;

        match u64::try_from(requested) {
            Ok(secs) if secs >= self.min_interval_secs => Ok(secs),
            _ => Err(ToolError::ValidationFailed(format!(
                "interval must be at least {} seconds, got {}",
                self.min_interval_secs, requested
            ))),
        }
    }
}

fn whole_seconds(number: &serde_json::Number) -> Option<i64> {
    if let Some(secs) = number.as_i64() {
        return Some(secs);
    }
    number
        .as_f64()
        .filter(|f| f.is_finite() && f.fract() == 0.0)
        .map(|f| f as i64)
}

#[async_trait]
impl Tool for StartMonitoringTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let secs = self.interval_secs(params)?;

        let text = match self.engine.start(Duration::from_secs(secs)) {
            StartOutcome::Started { interval } => format!(
                "Started GitHub status monitoring with {}s interval",
                interval.as_secs()
            ),
            StartOutcome::IntervalUpdated { interval, .. } => format!(
                "GitHub status monitoring already running, interval updated to {}s",
                interval.as_secs()
            ),
        };
        info!(correlation_id = %ctx.correlation_id, "{}", text);

        Ok(ToolResult::success(text))
    }
}
