//! Tool registry.

use std::sync::Arc;

use parking_lot::RwLock;

use statuswatch_protocols::error::ToolError;
use statuswatch_protocols::tool::{Tool, ToolDefinition};

/// Registry of available tools, kept in registration order so listings
/// are stable.
pub struct ToolRegistry {
    tools: RwLock<Vec<Arc<dyn Tool>>>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new() -> Self {
        Self {
            tools: RwLock::new(Vec::new()),
        }
    }

    /// Register a tool.
    ///
    /// Returns an error if a tool with the same ID is already registered.
    pub fn register(&self, tool: Arc<dyn Tool>) -> Result<(), ToolError> {
        let mut tools = self.tools.write();
        let id = &tool.definition().id;

        if tools.iter().any(|t| &t.definition().id == id) {
            return Err(ToolError::AlreadyRegistered(id.clone()));
        }

        tools.push(tool);
        Ok(())
    }

    /// Get a tool by ID.
    pub fn get(&self, id: &str) -> Option<Arc<dyn Tool>> {
        self.tools
            .read()
            .iter()
            .find(|t| t.definition().id == id)
            .cloned()
    }

    /// List all tool definitions.
    pub fn list(&self) -> Vec<ToolDefinition> {
        self.tools
            .read()
            .iter()
            .map(|t| t.definition().clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tools.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.read().is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
