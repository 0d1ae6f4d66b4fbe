//! Normalized status summary.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// Coarse severity reported by a status provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indicator {
    None,
    Minor,
    Major,
    Critical,
    Unknown,
    /// Only produced locally, for a failed fetch.
    Error,
}

impl Indicator {
    /// Map a remote indicator string. Anything unrecognised, including a
    /// remote `"error"`, becomes `Unknown`.
    pub fn from_remote(value: &str) -> Self {
        match value {
            "none" => Indicator::None,
            "minor" => Indicator::Minor,
            "major" => Indicator::Major,
            "critical" => Indicator::Critical,
            _ => Indicator::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Indicator::None => "none",
            Indicator::Minor => "minor",
            Indicator::Major => "major",
            Indicator::Critical => "critical",
            Indicator::Unknown => "unknown",
            Indicator::Error => "error",
        }
    }

    /// Anything other than `none` or `minor`.
    pub fn is_degraded(&self) -> bool {
        !matches!(self, Indicator::None | Indicator::Minor)
    }
}

impl std::fmt::Display for Indicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The normalized result of one status check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSummary {
    #[serde(rename = "status")]
    pub indicator: Indicator,
    pub description: String,
    /// ISO-8601 timestamp, or `"unknown"`.
    pub updated_at: String,
    #[serde(rename = "incidents")]
    pub incident_count: usize,
    #[serde(rename = "maintenances")]
    pub maintenance_count: usize,
}

impl StatusSummary {
    /// Parse a status page summary document, defaulting anything missing.
    pub fn from_payload(body: &[u8]) -> Result<Self, FetchError> {
        let raw: RawSummary =
            serde_json::from_slice(body).map_err(|e| FetchError::Decode(e.to_string()))?;
        Ok(raw.into())
    }

    /// Summary recorded in place of a failed fetch.
    pub fn fetch_failed(error: &FetchError) -> Self {
        Self {
            indicator: Indicator::Error,
            description: format!("Failed to fetch status: {}", error),
            updated_at: Utc::now().to_rfc3339(),
            incident_count: 0,
            maintenance_count: 0,
        }
    }

    pub fn is_error(&self) -> bool {
        self.indicator == Indicator::Error
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawSummary {
    status: Option<RawStatus>,
    page: Option<RawPage>,
    incidents: Option<Vec<serde_json::Value>>,
    scheduled_maintenances: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Default, Deserialize)]
struct RawStatus {
    indicator: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawPage {
    updated_at: Option<String>,
}

impl From<RawSummary> for StatusSummary {
    fn from(raw: RawSummary) -> Self {
        let status = raw.status.unwrap_or_default();
        let page = raw.page.unwrap_or_default();
        Self {
            indicator: status
                .indicator
                .as_deref()
                .map(Indicator::from_remote)
                .unwrap_or(Indicator::Unknown),
            description: status
                .description
                .unwrap_or_else(|| "No description".to_string()),
            updated_at: page.updated_at.unwrap_or_else(|| "unknown".to_string()),
            incident_count: raw.incidents.map_or(0, |v| v.len()),
            maintenance_count: raw.scheduled_maintenances.map_or(0, |v| v.len()),
        }
    }
}
