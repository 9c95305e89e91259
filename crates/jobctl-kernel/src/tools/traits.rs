//! Core tool traits and types.

use async_trait::async_trait;

pub use jobctl_types::{Example, ParamSchema, ToolArgs, ToolSchema};

use jobctl_types::ExecResult;

use super::context::ExecContext;

/// A tool that can be executed.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The tool's name (used for lookup).
    fn name(&self) -> &str;

    /// Get the tool's schema.
    fn schema(&self) -> ToolSchema;

    /// Execute the tool with the given arguments and context.
    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult;
}

/// Flags a tool does not declare in its schema.
///
/// Tools without options of their own use this to reject `-x`.
pub fn unknown_flags<'a>(schema: &ToolSchema, args: &'a ToolArgs) -> Vec<&'a str> {
    let mut unknown: Vec<&str> = args
        .flags
        .iter()
        .map(String::as_str)
        .filter(|f| !schema.params.iter().any(|p| p.matches_flag(f)))
        .collect();
    unknown.sort_unstable();
    unknown
}
