//! # statuswatch protocols
//!
//! Interface definitions shared between the monitor tools and the
//! dispatch layer. Contains no implementations.
//!
//! ## Core Traits
//!
//! - [`Tool`] - Trait for tool implementations

pub mod error;
pub mod tool;

pub use error::ToolError;
pub use tool::{Tool, ToolContext, ToolDefinition, ToolResult};
