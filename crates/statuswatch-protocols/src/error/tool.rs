//! Tool execution errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Tool already registered: {0}")]
    AlreadyRegistered(String),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Parameter validation failed: {0}")]
    ValidationFailed(String),

    #[error("Tool execution failed: {0}")]
    ExecutionFailed(String),
}

impl ToolError {
    /// Whether the error rejects the request itself rather than reporting
    /// a failure while running it.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            ToolError::UnknownTool(_)
                | ToolError::InvalidParameters(_)
                | ToolError::ValidationFailed(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_error_unknown_tool() {
        let err = ToolError::UnknownTool("fly_to_moon".to_string());
        assert_eq!(err.to_string(), "Unknown tool: fly_to_moon");
    }

    #[test]
    fn test_tool_error_already_registered() {
        let err = ToolError::AlreadyRegistered("stop_monitoring".to_string());
        assert!(err.to_string().contains("already registered"));
        assert!(err.to_string().contains("stop_monitoring"));
    }

    #[test]
    fn test_tool_error_invalid_parameters() {
        let err = ToolError::InvalidParameters("missing field".to_string());
        assert!(err.to_string().contains("Invalid parameters"));
    }

    #[test]
    fn test_tool_error_validation_failed() {
        let err = ToolError::ValidationFailed("interval must be at least 10".to_string());
        assert!(err.to_string().contains("validation failed"));
        assert!(err.to_string().contains("at least 10"));
    }

    #[test]
    fn test_tool_error_execution_failed() {
        let err = ToolError::ExecutionFailed("Something went wrong".to_string());
        assert!(err.to_string().contains("execution failed"));
    }

    #[test]
    fn test_is_rejection() {
        assert!(ToolError::UnknownTool("x".into()).is_rejection());
        assert!(ToolError::ValidationFailed("x".into()).is_rejection());
        assert!(ToolError::InvalidParameters("x".into()).is_rejection());
        assert!(!ToolError::ExecutionFailed("x".into()).is_rejection());
        assert!(!ToolError::AlreadyRegistered("x".into()).is_rejection());
    }

    #[test]
    fn test_tool_error_debug() {
        let err = ToolError::UnknownTool("test".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("UnknownTool"));
    }
}
