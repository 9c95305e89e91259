//! Built-in tools for jobctl.

mod bg;

use super::ToolRegistry;

/// Register all built-in tools with the registry.
pub fn register_builtins(registry: &mut ToolRegistry) {
    registry.register(bg::Bg);
}
