//! Tool system for jobctl.
//!
//! Every command is a tool implementing the `Tool` trait. The registry maps
//! names to tools; the kernel dispatches through it.
//!
//! # Architecture
//!
//! ```text
//! ToolRegistry
//! └── Builtins (bg)
//! ```

mod builtin;
mod context;
mod registry;
mod traits;

pub use builtin::register_builtins;
pub use context::ExecContext;
pub use registry::ToolRegistry;
pub use traits::{unknown_flags, Example, ParamSchema, Tool, ToolArgs, ToolSchema};
