//! # statuswatch monitor
//!
//! Periodic monitoring of an external status page.
//!
//! ## Components
//!
//! - [`StatusFetcher`] - one network call, mapped into a [`StatusSummary`]
//! - [`MonitorEngine`] - polling loop, cached summary, start/stop control
//! - [`AlertSink`] - where degraded-status alerts are delivered

pub mod alerts;
pub mod engine;
pub mod error;
pub mod fetcher;
pub mod summary;

pub use alerts::{evaluate_alerts, Alert, AlertKind, AlertSeverity, AlertSink, LogSink};
pub use engine::{MonitorEngine, MonitorSnapshot, StartOutcome};
pub use error::{FetchError, MonitorError};
pub use fetcher::{HttpStatusFetcher, StatusFetcher};
pub use summary::{Indicator, StatusSummary};
