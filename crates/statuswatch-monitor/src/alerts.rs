//! Alert types, evaluation and sinks.

#[cfg(test)]
#[path = "alerts_tests.rs"]
mod tests;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::error::MonitorError;
use crate::summary::{Indicator, StatusSummary};

/// What an alert is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertKind {
    /// Indicator is neither `none` nor `minor`.
    StatusDegraded,
    /// At least one incident is open.
    ActiveIncidents,
}

impl std::fmt::Display for AlertKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertKind::StatusDegraded => write!(f, "StatusDegraded"),
            AlertKind::ActiveIncidents => write!(f, "ActiveIncidents"),
        }
    }
}

/// Alert severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertSeverity::Warning => write!(f, "WARNING"),
            AlertSeverity::Error => write!(f, "ERROR"),
            AlertSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

impl From<Indicator> for AlertSeverity {
    fn from(indicator: Indicator) -> Self {
        match indicator {
            Indicator::Critical => AlertSeverity::Critical,
            Indicator::Major | Indicator::Error => AlertSeverity::Error,
            Indicator::None | Indicator::Minor | Indicator::Unknown => AlertSeverity::Warning,
        }
    }
}

/// An alert raised from a loop-driven poll.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub severity: AlertSeverity,
    /// Human-readable line.
    pub message: String,
    pub timestamp: DateTime<Utc>,
    /// Summary fields the alert was derived from.
    pub details: serde_json::Value,
}

impl Alert {
    pub fn status_degraded(indicator: Indicator, description: &str) -> Self {
        Self {
            kind: AlertKind::StatusDegraded,
            severity: indicator.into(),
            message: format!("GitHub Status Alert: {} - {}", indicator, description),
            timestamp: Utc::now(),
            details: serde_json::json!({
                "indicator": indicator,
                "description": description,
            }),
        }
    }

    pub fn active_incidents(count: usize) -> Self {
        Self {
            kind: AlertKind::ActiveIncidents,
            severity: AlertSeverity::Warning,
            message: format!("GitHub Incidents Alert: {} active incidents", count),
            timestamp: Utc::now(),
            details: serde_json::json!({ "count": count }),
        }
    }
}

/// Alerts warranted by a freshly polled summary.
pub fn evaluate_alerts(summary: &StatusSummary) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if summary.indicator.is_degraded() {
        alerts.push(Alert::status_degraded(summary.indicator, &summary.description));
    }

    if summary.incident_count > 0 {
        alerts.push(Alert::active_incidents(summary.incident_count));
    }

    alerts
}

/// Destination for alerts. The engine does not own delivery.
#[async_trait]
pub trait AlertSink: Send + Sync {
    /// Sink name.
    fn name(&self) -> &str;

    /// Deliver an alert.
    async fn send(&self, alert: &Alert) -> Result<(), MonitorError>;
}

/// Log sink (writes to tracing).
pub struct LogSink;

#[async_trait]
impl AlertSink for LogSink {
    fn name(&self) -> &str {
        "log"
    }

    async fn send(&self, alert: &Alert) -> Result<(), MonitorError> {
        match alert.severity {
            AlertSeverity::Warning => warn!(kind = %alert.kind, "[ALERT] {}", alert.message),
            AlertSeverity::Error | AlertSeverity::Critical => {
                error!(kind = %alert.kind, "[ALERT] {}", alert.message)
            }
        }
        Ok(())
    }
}
