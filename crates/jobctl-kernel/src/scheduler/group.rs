//! Job groups and the requests that change them.

use crate::scheduler::JobId;

/// Control state shared by every process of one job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobGroup {
    /// Process group the job runs in, if it has its own.
    pub pgid: Option<u32>,
    /// Whether the group owns the terminal.
    pub foreground: bool,
}

impl JobGroup {
    pub fn new(pgid: Option<u32>, foreground: bool) -> Self {
        Self { pgid, foreground }
    }

    pub(crate) fn apply(&mut self, change: GroupChange) {
        match change {
            GroupChange::Foreground(foreground) => self.foreground = foreground,
        }
    }
}

/// A change to a job group's state.
///
/// Builtins never write group fields; they send a `GroupRequest` to the job
/// manager, which owns the group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupRequest {
    SetForeground { job: JobId, foreground: bool },
}

impl GroupRequest {
    /// Move the job's group to the background.
    pub fn background(job: JobId) -> Self {
        GroupRequest::SetForeground { job, foreground: false }
    }

    /// Move the job's group to the foreground.
    pub fn foreground(job: JobId) -> Self {
        GroupRequest::SetForeground { job, foreground: true }
    }

    /// The job whose group is addressed.
    pub fn job(&self) -> JobId {
        match self {
            GroupRequest::SetForeground { job, .. } => *job,
        }
    }

    pub(crate) fn change(&self) -> GroupChange {
        match self {
            GroupRequest::SetForeground { foreground, .. } => GroupChange::Foreground(*foreground),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GroupChange {
    Foreground(bool),
}
