//! Tool execution context.

/// Context for tool execution.
#[derive(Debug, Clone)]
pub struct ToolContext {
    /// Session the call arrived on (transport-defined).
    pub session_id: String,

    /// Correlation ID for tracing.
    pub correlation_id: String,
}

impl ToolContext {
    /// Create a new tool context with a fresh correlation ID.
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            correlation_id: uuid::Uuid::new_v4().to_string(),
        }
    }

    /// Replace the correlation ID, e.g. with a transport request ID.
    pub fn with_correlation_id(mut self, correlation_id: impl Into<String>) -> Self {
        self.correlation_id = correlation_id.into();
        self
    }
}
