//! Monitor control tools for statuswatch.
//!
//! Provides `check_github_status`, `start_monitoring` and `stop_monitoring`,
//! plus the registry and dispatcher the transport layer calls into.

mod dispatcher;
mod registry;
mod toolset;
mod tools;

pub use dispatcher::ToolDispatcher;
pub use registry::ToolRegistry;
pub use toolset::register_monitor_tools;
pub use tools::{CheckStatusTool, StartMonitoringTool, StopMonitoringTool, STATUS_BANNER};
