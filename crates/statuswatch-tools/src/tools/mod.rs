//! Monitor tool implementations.

mod check_status;
mod start_monitoring;
mod stop_monitoring;

pub use check_status::{CheckStatusTool, STATUS_BANNER};
pub use start_monitoring::StartMonitoringTool;
pub use stop_monitoring::StopMonitoringTool;
