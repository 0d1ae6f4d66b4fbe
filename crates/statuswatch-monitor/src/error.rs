//! Monitor errors.

use thiserror::Error;

/// Failure to obtain a status summary from the remote endpoint.
///
/// Never leaves the engine: [`crate::MonitorEngine`] turns it into an
/// `error` summary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Network or timeout failure reaching the endpoint.
    #[error("{0}")]
    Transport(String),

    /// The endpoint answered with a non-success status.
    #[error("unexpected HTTP status {0}")]
    HttpStatus(u16),

    /// The body was not a JSON status document.
    #[error("invalid status payload: {0}")]
    Decode(String),
}

/// Monitor error types.
#[derive(Debug, Error)]
pub enum MonitorError {
    /// HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
