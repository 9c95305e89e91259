//! Job table for jobctl.
//!
//! The `JobManager` owns every job and its group. Jobs are kept in recency
//! order: the most recently created or promoted job comes first, which is the
//! order `bg` scans when it has to pick a job by itself.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::scheduler::{
    GroupRequest, JobControl, JobControlError, JobGroup, JobId, JobInfo, JobStatus, ResumeError,
    Resumer, SignalResumer,
};

/// Which jobs run under job control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobControlMode {
    /// Every job gets its own process group.
    #[default]
    Full,
    /// Only jobs started from an interactive session.
    Interactive,
    /// No job is job-controlled; `bg` refuses every job.
    None,
}

impl JobControlMode {
    /// Whether a new job wants job control under this mode.
    pub fn grants(self, interactive: bool) -> bool {
        match self {
            JobControlMode::Full => true,
            JobControlMode::Interactive => interactive,
            JobControlMode::None => false,
        }
    }
}

/// Description of a job handed over by whoever launched it.
#[derive(Debug, Clone)]
pub struct JobSpec {
    /// Command text, as the user typed it.
    pub command: String,
    /// Pids of the pipeline, leader first. Must not be empty.
    pub pids: Vec<u32>,
    /// Process group, if the job was placed in its own group.
    pub pgid: Option<u32>,
    /// Starts in the foreground.
    pub foreground: bool,
    /// Overrides the manager's job-control mode for this job.
    pub wants_job_control: Option<bool>,
}

impl JobSpec {
    /// A single-process job leading its own process group.
    pub fn new(command: impl Into<String>, pid: u32) -> Self {
        Self {
            command: command.into(),
            pids: vec![pid],
            pgid: Some(pid),
            foreground: true,
            wants_job_control: None,
        }
    }

    /// Add follow-on pipeline processes.
    pub fn with_pids(mut self, pids: impl IntoIterator<Item = u32>) -> Self {
        self.pids.extend(pids);
        self
    }

    pub fn with_pgid(mut self, pgid: Option<u32>) -> Self {
        self.pgid = pgid;
        self
    }

    pub fn in_background(mut self) -> Self {
        self.foreground = false;
        self
    }

    pub fn with_job_control(mut self, wants: bool) -> Self {
        self.wants_job_control = Some(wants);
        self
    }
}

/// A tracked job.
struct Job {
    id: JobId,
    command: String,
    status: JobStatus,
    pids: Vec<u32>,
    group: JobGroup,
    wants_job_control: bool,
}

impl Job {
    fn info(&self) -> JobInfo {
        JobInfo {
            id: self.id,
            command: self.command.clone(),
            status: self.status,
            pid: self.pids.first().copied().unwrap_or_default(),
            pids: self.pids.clone(),
            pgid: self.group.pgid,
            wants_job_control: self.wants_job_control,
            foreground: self.group.foreground,
        }
    }
}

/// Manager for shell jobs.
pub struct JobManager {
    /// Counter for generating unique job IDs.
    next_id: AtomicU64,
    /// Jobs, most recent first.
    jobs: Mutex<Vec<Job>>,
    resumer: Arc<dyn Resumer>,
    mode: JobControlMode,
    interactive: bool,
}

impl JobManager {
    /// Create a job manager that continues jobs with SIGCONT.
    pub fn new() -> Self {
        Self::with_resumer(Arc::new(SignalResumer))
    }

    /// Create a job manager with a custom resumer.
    pub fn with_resumer(resumer: Arc<dyn Resumer>) -> Self {
        Self {
            next_id: AtomicU64::new(1),
            jobs: Mutex::new(Vec::new()),
            resumer,
            mode: JobControlMode::default(),
            interactive: false,
        }
    }

    /// Set the job-control mode applied to newly registered jobs.
    pub fn with_mode(mut self, mode: JobControlMode, interactive: bool) -> Self {
        self.mode = mode;
        self.interactive = interactive;
        self
    }

    /// Start tracking a job. It becomes the most recent job.
    pub async fn register(&self, spec: JobSpec) -> JobId {
        let id = JobId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let wants_job_control = spec
            .wants_job_control
            .unwrap_or_else(|| self.mode.grants(self.interactive));

        let job = Job {
            id,
            command: spec.command,
            status: JobStatus::Running,
            pids: spec.pids,
            group: JobGroup::new(spec.pgid, spec.foreground),
            wants_job_control,
        };

        tracing::debug!(job = %id, wants_job_control, "registered job");
        self.jobs.lock().await.insert(0, job);
        id
    }

    /// Record that the job was stopped by a signal.
    pub async fn mark_stopped(&self, id: JobId) -> bool {
        self.set_status(id, JobStatus::Stopped).await
    }

    /// Record that the job is running again. Completed jobs stay completed.
    pub async fn mark_running(&self, id: JobId) -> bool {
        let mut jobs = self.jobs.lock().await;
        match jobs.iter_mut().find(|j| j.id == id) {
            Some(job) if !job.status.is_completed() => {
                job.status = JobStatus::Running;
                true
            }
            _ => false,
        }
    }

    /// Record that every process of the job exited.
    pub async fn mark_completed(&self, id: JobId, success: bool) -> bool {
        let status = if success { JobStatus::Done } else { JobStatus::Failed };
        self.set_status(id, status).await
    }

    async fn set_status(&self, id: JobId, status: JobStatus) -> bool {
        let mut jobs = self.jobs.lock().await;
        match jobs.iter_mut().find(|j| j.id == id) {
            Some(job) => {
                job.status = status;
                true
            }
            None => false,
        }
    }

    /// List all jobs, most recent first.
    pub async fn list(&self) -> Vec<JobInfo> {
        let jobs = self.jobs.lock().await;
        jobs.iter().map(Job::info).collect()
    }

    /// Get info for a specific job.
    pub async fn get(&self, id: JobId) -> Option<JobInfo> {
        let jobs = self.jobs.lock().await;
        jobs.iter().find(|j| j.id == id).map(Job::info)
    }

    /// Find the live job owning `pid`, leader or not.
    ///
    /// Completed jobs are skipped: their pids may already belong to
    /// someone else.
    pub async fn get_by_pid(&self, pid: u32) -> Option<JobInfo> {
        let jobs = self.jobs.lock().await;
        jobs.iter()
            .find(|j| !j.status.is_completed() && j.pids.contains(&pid))
            .map(Job::info)
    }

    /// Most recent job that is stopped, job-controlled and still alive.
    pub async fn last_stopped(&self) -> Option<JobInfo> {
        let jobs = self.jobs.lock().await;
        jobs.iter().map(Job::info).find(JobInfo::is_resumable)
    }

    /// Apply a group change requested by a builtin.
    pub async fn apply(&self, request: GroupRequest) -> Result<(), JobControlError> {
        let id = request.job();
        let mut jobs = self.jobs.lock().await;
        let job = jobs
            .iter_mut()
            .find(|j| j.id == id)
            .ok_or(JobControlError::NoSuchJob(id))?;
        job.group.apply(request.change());
        tracing::debug!(job = %id, foreground = job.group.foreground, "group updated");
        Ok(())
    }

    /// Continue a job's process group and mark it running.
    ///
    /// A job that is already running is signalled again; that is not an error.
    pub async fn resume(&self, id: JobId) -> Result<(), JobControlError> {
        let pgid = {
            let jobs = self.jobs.lock().await;
            let job = jobs
                .iter()
                .find(|j| j.id == id)
                .ok_or(JobControlError::NoSuchJob(id))?;
            job.group.pgid.ok_or(ResumeError::NoProcessGroup(id))?
        };

        self.resumer.resume(pgid)?;
        self.mark_running(id).await;
        Ok(())
    }

    /// Move a job to the front of the recency order.
    pub async fn promote(&self, id: JobId) {
        let mut jobs = self.jobs.lock().await;
        if let Some(pos) = jobs.iter().position(|j| j.id == id) {
            let job = jobs.remove(pos);
            jobs.insert(0, job);
        }
    }

    /// Stop tracking a job.
    pub async fn remove(&self, id: JobId) -> bool {
        let mut jobs = self.jobs.lock().await;
        let before = jobs.len();
        jobs.retain(|j| j.id != id);
        jobs.len() != before
    }

    /// Remove completed jobs from tracking.
    pub async fn cleanup(&self) {
        let mut jobs = self.jobs.lock().await;
        jobs.retain(|j| !j.status.is_completed());
    }
}

impl Default for JobManager {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JobControl for JobManager {
    async fn jobs(&self) -> Vec<JobInfo> {
        self.list().await
    }

    async fn find_by_pid(&self, pid: u32) -> Option<JobInfo> {
        self.get_by_pid(pid).await
    }

    async fn last_stopped(&self) -> Option<JobInfo> {
        JobManager::last_stopped(self).await
    }

    async fn request(&self, request: GroupRequest) -> Result<(), JobControlError> {
        self.apply(request).await
    }

    async fn resume(&self, id: JobId) -> Result<(), JobControlError> {
        JobManager::resume(self, id).await
    }

    async fn promote(&self, id: JobId) {
        JobManager::promote(self, id).await
    }
}
