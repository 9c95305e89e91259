//! ExecResult — the structured result of every builtin invocation.

use serde::{Deserialize, Serialize};

use crate::status::STATUS_CMD_OK;

/// The result of executing a builtin.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExecResult {
    /// Exit code. 0 means success.
    pub code: i64,
    /// Raw standard output.
    pub out: String,
    /// Raw standard error. Builtins write their diagnostics here, one per line.
    pub err: String,
}

impl ExecResult {
    /// Create a successful result with output.
    pub fn success(out: impl Into<String>) -> Self {
        Self {
            code: STATUS_CMD_OK,
            out: out.into(),
            err: String::new(),
        }
    }

    /// Create a failed result with an error message.
    pub fn failure(code: i64, err: impl Into<String>) -> Self {
        Self {
            code,
            out: String::new(),
            err: err.into(),
        }
    }

    /// Create a result from raw output streams.
    pub fn from_output(code: i64, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            code,
            out: stdout.into(),
            err: stderr.into(),
        }
    }

    /// True if the command succeeded (exit code 0).
    pub fn ok(&self) -> bool {
        self.code == STATUS_CMD_OK
    }

    /// Standard error split into diagnostic lines.
    pub fn err_lines(&self) -> impl Iterator<Item = &str> {
        self.err.lines()
    }
}
