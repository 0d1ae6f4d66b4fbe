//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Status page polled when nothing else is configured.
pub const DEFAULT_STATUS_URL: &str = "https://www.githubstatus.com/api/v2/summary.json";

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub monitor: MonitorConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server identity reported to MCP clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_name")]
    pub name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: default_server_name(),
        }
    }
}

fn default_server_name() -> String {
    "mcp-github-status-monitor".to_string()
}

/// Status polling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Status summary endpoint.
    #[serde(default = "default_status_url")]
    pub status_url: String,

    /// Interval used when `start_monitoring` is called without one.
    #[serde(default = "default_interval_secs")]
    pub default_interval_secs: u64,

    /// Smallest interval a caller may request.
    #[serde(default = "default_min_interval_secs")]
    pub min_interval_secs: u64,

    /// Delay before the next tick after a failed poll.
    #[serde(default = "default_retry_delay_secs")]
    pub retry_delay_secs: u64,

    /// Timeout for a single status request.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl MonitorConfig {
    pub fn default_interval(&self) -> Duration {
        Duration::from_secs(self.default_interval_secs)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            status_url: default_status_url(),
            default_interval_secs: default_interval_secs(),
            min_interval_secs: default_min_interval_secs(),
            retry_delay_secs: default_retry_delay_secs(),
            request_timeout_secs: default_request_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_status_url() -> String {
    DEFAULT_STATUS_URL.to_string()
}

fn default_interval_secs() -> u64 {
    300
}

fn default_min_interval_secs() -> u64 {
    10
}

fn default_retry_delay_secs() -> u64 {
    60
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("statuswatch/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for daily-rotated log files. Console-only when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,

    /// Rotated files to keep.
    #[serde(default = "default_max_log_files")]
    pub max_log_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            dir: None,
            max_log_files: default_max_log_files(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_log_files() -> usize {
    7
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
