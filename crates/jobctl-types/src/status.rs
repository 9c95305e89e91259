//! Builtin exit statuses.
//!
//! Per-job statuses are OR-combined into a batch status, so any failure in a
//! batch leaves a nonzero bit set.

/// Command succeeded.
pub const STATUS_CMD_OK: i64 = 0;

/// Command ran but failed.
pub const STATUS_CMD_ERROR: i64 = 1;

/// Command was given arguments it could not accept.
pub const STATUS_INVALID_ARGS: i64 = 2;
