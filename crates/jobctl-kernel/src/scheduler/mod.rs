//! Scheduler module for jobctl — the job table and job control.
//!
//! This module provides:
//! - **Job table**: `JobManager` tracks jobs in recency order and owns their
//!   groups.
//! - **Job control**: the `JobControl` trait builtins use to read jobs and
//!   request state changes.
//! - **Resumers**: how a stopped job's process group is continued.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      JobManager                             │
//! │  jobs: Vec<Job>   (most recent first)                       │
//! │  - register(JobSpec) → JobId                                │
//! │  - apply(GroupRequest)        foreground flag changes       │
//! │  - resume(JobId) ──────────▶  Resumer (SIGCONT to pgid)     │
//! │  - promote(JobId)             move to front                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod control;
mod group;
mod job;
mod resume;

pub use control::{JobControl, JobControlError};
pub use group::{GroupRequest, JobGroup};
pub use job::{JobControlMode, JobManager, JobSpec};
pub use jobctl_types::{JobId, JobInfo, JobStatus};
pub use resume::{NoopResumer, ResumeError, Resumer, SignalResumer};
