//! bg — Resume jobs in the background.

use async_trait::async_trait;

use jobctl_types::{ExecResult, Value, STATUS_CMD_ERROR, STATUS_INVALID_ARGS};

use crate::background::{background, SpecifierOutcome, TransitionState};
use crate::help::format_tool_help;
use crate::tools::{unknown_flags, ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};

/// Bg tool: move stopped jobs to the background and continue them.
pub struct Bg;

#[async_trait]
impl Tool for Bg {
    fn name(&self) -> &str {
        "bg"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("bg", "Resume jobs in the background")
            .param(ParamSchema::optional(
                "pid",
                "int",
                Value::Null,
                "Process IDs of jobs to resume (defaults to most recently stopped job)",
            ))
            .param(
                ParamSchema::optional("help", "bool", Value::Bool(false), "Show this help (--help or -h)")
                    .with_aliases(["h"]),
            )
            .example("Resume last stopped job", "bg")
            .example("Resume the jobs owning these processes", "bg 4132 4140")
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let schema = self.schema();

        let unknown = unknown_flags(&schema, &args);
        if !unknown.is_empty() {
            let err: String = unknown
                .iter()
                .map(|f| format!("bg: {}: unknown option\n", args.flag_spelling(f)))
                .collect();
            return ExecResult::failure(STATUS_INVALID_ARGS, err);
        }

        if args.has_flag("help") || args.has_flag("h") {
            return ExecResult::success(format_tool_help(&schema));
        }

        let control = match &ctx.job_control {
            Some(c) => c.clone(),
            None => return ExecResult::failure(STATUS_CMD_ERROR, "bg: no job manager\n"),
        };

        let report = background(control.as_ref(), &args.positional).await;
        let refused = report.outcomes().iter().any(|o| {
            matches!(o, SpecifierOutcome::Handled { outcome, .. } if outcome.state == TransitionState::Rejected)
        });

        let mut result = report.into_exec_result();
        // A job outside job control gets usage help after the error.
        if refused {
            result.err.push_str(&format_tool_help(&schema));
        }
        result
    }
}
