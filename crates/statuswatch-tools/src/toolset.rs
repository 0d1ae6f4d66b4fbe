//! Registration of the monitor tool set.

use std::sync::Arc;

use statuswatch_config::MonitorConfig;
use statuswatch_monitor::MonitorEngine;
use statuswatch_protocols::error::ToolError;

use crate::registry::ToolRegistry;
use crate::tools::{CheckStatusTool, StartMonitoringTool, StopMonitoringTool};

/// Register `check_github_status`, `start_monitoring` and `stop_monitoring`
/// against a shared engine, in that order.
pub fn register_monitor_tools(
    registry: &ToolRegistry,
    engine: MonitorEngine,
    config: &MonitorConfig,
) -> Result<(), ToolError> {
    registry.register(Arc::new(CheckStatusTool::new(engine.clone())))?;
    registry.register(Arc::new(StartMonitoringTool::new(engine.clone(), config)))?;
    registry.register(Arc::new(StopMonitoringTool::new(engine)))?;

    tracing::debug!(count = registry.len(), "Monitor tools registered");
    Ok(())
}
