//! Job identification and status types.

use serde::{Deserialize, Serialize};

/// Shell job number, as shown by `jobs` and accepted by `bg`/`fg`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct JobId(pub u64);

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Execution state of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// Job is currently running.
    Running,
    /// Job was stopped by a signal (e.g., Ctrl-Z / SIGTSTP).
    Stopped,
    /// Job completed successfully.
    Done,
    /// Job failed with an error.
    Failed,
}

impl JobStatus {
    /// True once every process of the job has exited.
    pub fn is_completed(self) -> bool {
        matches!(self, JobStatus::Done | JobStatus::Failed)
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobStatus::Running => write!(f, "Running"),
            JobStatus::Stopped => write!(f, "Stopped"),
            JobStatus::Done => write!(f, "Done"),
            JobStatus::Failed => write!(f, "Failed"),
        }
    }
}

/// Snapshot of a job as seen by builtins.
///
/// Builtins never hold the live job; they read a snapshot and send requests
/// back to the job manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobInfo {
    /// Job ID.
    pub id: JobId,
    /// Command description.
    pub command: String,
    /// Current status.
    pub status: JobStatus,
    /// Leader process ID.
    pub pid: u32,
    /// Every process ID of the pipeline, leader first.
    pub pids: Vec<u32>,
    /// Process group, if the job runs in its own group.
    pub pgid: Option<u32>,
    /// Whether the job runs under job control and may be moved between
    /// foreground and background.
    pub wants_job_control: bool,
    /// Foreground flag of the job's group.
    pub foreground: bool,
}

impl JobInfo {
    pub fn is_stopped(&self) -> bool {
        self.status == JobStatus::Stopped
    }

    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }

    /// Whether any process of this job has the given pid.
    pub fn has_pid(&self, pid: u32) -> bool {
        self.pid == pid || self.pids.contains(&pid)
    }

    /// May be moved to the background: job-controlled and still alive.
    pub fn is_eligible(&self) -> bool {
        self.wants_job_control && !self.is_completed()
    }

    /// Candidate for `bg` without arguments: stopped and eligible.
    pub fn is_resumable(&self) -> bool {
        self.is_stopped() && self.is_eligible()
    }
}
