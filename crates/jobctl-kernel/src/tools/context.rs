//! Execution context for tools.

use std::sync::Arc;

use crate::scheduler::JobControl;

/// Execution context passed to tools.
///
/// Carries the handles a builtin may need. Job control is optional so tools
/// can run in contexts without a job table (scripts, tests).
#[derive(Default)]
pub struct ExecContext {
    /// Job table for job-control builtins.
    pub job_control: Option<Arc<dyn JobControl>>,
}

impl ExecContext {
    /// Create a context without job control.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context wired to a job table.
    pub fn with_job_control(control: Arc<dyn JobControl>) -> Self {
        Self {
            job_control: Some(control),
        }
    }
}
