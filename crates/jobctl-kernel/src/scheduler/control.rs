//! The job-control seam consumed by builtins.

use async_trait::async_trait;
use thiserror::Error;

use crate::scheduler::{GroupRequest, JobId, JobInfo, ResumeError};

/// Errors from the job-control subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JobControlError {
    #[error("no such job: {0}")]
    NoSuchJob(JobId),
    #[error(transparent)]
    Resume(#[from] ResumeError),
}

/// Access to the shell's job table.
///
/// `JobManager` is the production implementation; tests provide fakes.
/// Callers get snapshots and send requests; they never hold a live job.
#[async_trait]
pub trait JobControl: Send + Sync {
    /// All jobs, most recently used first.
    async fn jobs(&self) -> Vec<JobInfo>;

    /// The job that owns `pid`, if any.
    async fn find_by_pid(&self, pid: u32) -> Option<JobInfo>;

    /// The most recent job `bg` may pick without arguments.
    async fn last_stopped(&self) -> Option<JobInfo> {
        self.jobs().await.into_iter().find(JobInfo::is_resumable)
    }

    /// Apply a group state change.
    async fn request(&self, request: GroupRequest) -> Result<(), JobControlError>;

    /// Continue the job's processes.
    async fn resume(&self, id: JobId) -> Result<(), JobControlError>;

    /// Mark the job as the most recently used one.
    async fn promote(&self, id: JobId);
}
