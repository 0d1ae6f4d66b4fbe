//! Tool protocol definitions.
//!
//! Tools are the only way callers interact with the monitor.

mod traits;
mod definition;
mod context;
mod result;

pub use traits::*;
pub use definition::*;
pub use context::*;
pub use result::*;
