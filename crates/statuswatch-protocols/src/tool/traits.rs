//! Tool trait definition.

use async_trait::async_trait;

use super::{ToolContext, ToolDefinition, ToolResult};
use crate::error::ToolError;

/// Core trait for tools.
///
/// Tools are named, schema-described operations the dispatch layer can invoke.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the tool definition.
    fn definition(&self) -> &ToolDefinition;

    /// Execute the tool with the given parameters.
    async fn execute(
        &self,
        params: serde_json::Value,
        ctx: ToolContext,
    ) -> Result<ToolResult, ToolError>;

    /// Validate the parameters before execution.
    ///
    /// A missing argument object arrives as `null` and is accepted.
    fn validate(&self, params: &serde_json::Value) -> Result<(), ToolError> {
        if params.is_null() || params.is_object() {
            return Ok(());
        }
        Err(ToolError::InvalidParameters(
            "Parameters must be an object".to_string(),
        ))
    }
}
