//! Integration tests for the `bg` builtin.
//!
//! Tests verify:
//! - the implicit pick takes the first eligible job in table order
//! - invalid arguments cancel the whole batch
//! - unknown pids, and pids of finished jobs, are reported but do not
//!   fail the command
//! - per-job failures are OR-combined into the exit status
//! - backgrounding an already running job is harmless

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use jobctl_kernel::background::{background, SpecifierOutcome, TransitionState};
use jobctl_kernel::scheduler::{
    GroupRequest, JobControl, JobControlError, JobManager, JobSpec, ResumeError, Resumer,
};
use jobctl_kernel::tools::ToolArgs;
use jobctl_kernel::{JobId, JobInfo, JobStatus, Kernel, KernelConfig, Value};
use jobctl_types::{STATUS_CMD_ERROR, STATUS_INVALID_ARGS};
use tracing_subscriber::EnvFilter;

// ============================================================================
// Test Helpers
// ============================================================================

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(KernelConfig::default().log_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Resumer that records every process group it was asked to continue.
#[derive(Default)]
struct RecordingResumer {
    calls: Mutex<Vec<u32>>,
    failing: Vec<u32>,
}

impl RecordingResumer {
    fn failing(pgids: &[u32]) -> Self {
        Self {
            failing: pgids.to_vec(),
            ..Default::default()
        }
    }

    fn calls(&self) -> Vec<u32> {
        self.calls.lock().unwrap().clone()
    }
}

impl Resumer for RecordingResumer {
    fn resume(&self, pgid: u32) -> Result<(), ResumeError> {
        self.calls.lock().unwrap().push(pgid);
        if self.failing.contains(&pgid) {
            return Err(ResumeError::Signal {
                pgid,
                reason: "ESRCH: No such process".into(),
            });
        }
        Ok(())
    }
}

fn manager(resumer: Arc<RecordingResumer>) -> Arc<JobManager> {
    Arc::new(JobManager::with_resumer(resumer))
}

/// Job table with one hand-written job, for exact job ids.
struct SingleJob {
    job: Mutex<JobInfo>,
    calls: Mutex<Vec<&'static str>>,
}

impl SingleJob {
    fn new(job: JobInfo) -> Self {
        Self {
            job: Mutex::new(job),
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl JobControl for SingleJob {
    async fn jobs(&self) -> Vec<JobInfo> {
        vec![self.job.lock().unwrap().clone()]
    }

    async fn find_by_pid(&self, pid: u32) -> Option<JobInfo> {
        let job = self.job.lock().unwrap();
        job.has_pid(pid).then(|| job.clone())
    }

    async fn request(&self, request: GroupRequest) -> Result<(), JobControlError> {
        let GroupRequest::SetForeground { foreground, .. } = request;
        self.calls.lock().unwrap().push("request");
        self.job.lock().unwrap().foreground = foreground;
        Ok(())
    }

    async fn resume(&self, _id: JobId) -> Result<(), JobControlError> {
        self.calls.lock().unwrap().push("resume");
        Ok(())
    }

    async fn promote(&self, _id: JobId) {
        self.calls.lock().unwrap().push("promote");
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[tokio::test]
async fn test_implicit_bg_of_stopped_sleep() {
    init_tracing();
    let table = SingleJob::new(JobInfo {
        id: JobId(4132),
        command: "sleep 100".into(),
        status: JobStatus::Stopped,
        pid: 4132,
        pids: vec![4132],
        pgid: Some(4132),
        wants_job_control: true,
        foreground: true,
    });

    let report = background(&table, &[]).await;

    assert_eq!(report.diagnostics(), &["Send job 4132 'sleep 100' to background".to_string()]);
    assert!(!table.job.lock().unwrap().foreground);
    assert_eq!(*table.calls.lock().unwrap(), vec!["request", "resume", "promote"]);
    assert_eq!(report.status(), 0);
}

#[tokio::test]
async fn test_bg_unknown_pid_is_not_an_error() {
    init_tracing();
    let kernel = Kernel::transient().unwrap();
    let result = kernel.execute("bg", ToolArgs::positional(["99999"])).await.unwrap();

    assert_eq!(result.code, 0);
    assert_eq!(result.err, "bg: Could not find job '99999'\n");
}

#[tokio::test]
async fn test_bg_word_is_invalid_specifier() {
    init_tracing();
    let resumer = Arc::new(RecordingResumer::default());
    let jobs = manager(resumer.clone());
    let id = jobs.register(JobSpec::new("sleep 100", 4132)).await;
    jobs.mark_stopped(id).await;

    let report = background(jobs.as_ref(), &[Value::from("abc")]).await;
    let result = report.into_exec_result();

    assert_eq!(result.code, STATUS_INVALID_ARGS);
    assert_eq!(result.err, "bg: 'abc' is not a valid job specifier\n");
    assert!(resumer.calls().is_empty());
    assert!(jobs.get(id).await.unwrap().foreground);
}

// ============================================================================
// Properties
// ============================================================================

#[tokio::test]
async fn test_no_eligible_job_without_arguments() {
    let resumer = Arc::new(RecordingResumer::default());
    let jobs = manager(resumer.clone());
    let running = jobs.register(JobSpec::new("make", 10)).await;
    let uncontrolled = jobs.register(JobSpec::new("less", 20).with_job_control(false)).await;
    let finished = jobs.register(JobSpec::new("ls", 30)).await;
    jobs.mark_stopped(uncontrolled).await;
    jobs.mark_stopped(finished).await;
    jobs.mark_completed(finished, true).await;

    let report = background(jobs.as_ref(), &[]).await;

    assert_eq!(report.status(), STATUS_CMD_ERROR);
    assert_eq!(report.outcomes(), &[SpecifierOutcome::NoEligibleJob]);
    assert!(resumer.calls().is_empty());
    assert!(jobs.get(running).await.unwrap().foreground);
}

#[tokio::test]
async fn test_implicit_picks_most_recent_stopped_job_once() {
    let resumer = Arc::new(RecordingResumer::default());
    let jobs = manager(resumer.clone());
    let older = jobs.register(JobSpec::new("vim a", 100)).await;
    let newer = jobs.register(JobSpec::new("vim b", 200)).await;
    jobs.mark_stopped(older).await;
    jobs.mark_stopped(newer).await;

    let report = background(jobs.as_ref(), &[]).await;

    assert_eq!(report.status(), 0);
    assert_eq!(report.backgrounded().collect::<Vec<_>>(), vec![newer]);
    assert_eq!(resumer.calls(), vec![200]);
    assert!(!jobs.get(newer).await.unwrap().foreground);
    assert_eq!(jobs.get(newer).await.unwrap().status, JobStatus::Running);
    assert!(jobs.get(older).await.unwrap().foreground);
    assert!(jobs.get(older).await.unwrap().is_stopped());
}

#[tokio::test]
async fn test_invalid_token_cancels_valid_ones() {
    let resumer = Arc::new(RecordingResumer::default());
    let jobs = manager(resumer.clone());
    let id = jobs.register(JobSpec::new("sleep 1", 10)).await;
    jobs.mark_stopped(id).await;

    let tokens = [Value::from("10"), Value::from("1x"), Value::from("10"), Value::Int(-1)];
    let report = background(jobs.as_ref(), &tokens).await;

    assert_eq!(report.status(), STATUS_INVALID_ARGS);
    assert_eq!(report.diagnostics().len(), 2);
    assert!(resumer.calls().is_empty());
    assert!(jobs.get(id).await.unwrap().is_stopped());
}

#[tokio::test]
async fn test_batch_continues_past_failures() {
    init_tracing();
    let resumer = Arc::new(RecordingResumer::failing(&[20]));
    let jobs = manager(resumer.clone());
    let ok = jobs.register(JobSpec::new("sleep 10", 10)).await;
    let broken = jobs.register(JobSpec::new("sleep 20", 20)).await;
    let refused = jobs.register(JobSpec::new("cat", 30).with_job_control(false)).await;
    for id in [ok, broken, refused] {
        jobs.mark_stopped(id).await;
    }

    let tokens = [Value::from("20"), Value::from("31"), Value::from("30"), Value::from("10")];
    let report = background(jobs.as_ref(), &tokens).await;

    // 1 | 0 | 1 | 0
    assert_eq!(report.status(), STATUS_CMD_ERROR);
    assert_eq!(resumer.calls(), vec![20, 10]);
    assert_eq!(
        report.diagnostics(),
        &[
            "Send job 2 'sleep 20' to background".to_string(),
            "bg: Could not resume job 2, 'sleep 20': failed to continue process group 20: ESRCH: No such process".to_string(),
            "bg: Could not find job '31'".to_string(),
            "bg: Can't put job 3, 'cat' to background because it is not under job control".to_string(),
            "Send job 1 'sleep 10' to background".to_string(),
        ]
    );

    // resume failure leaves the group in the background and the job stopped
    let broken_info = jobs.get(broken).await.unwrap();
    assert!(!broken_info.foreground);
    assert!(broken_info.is_stopped());

    // refused job untouched
    assert!(jobs.get(refused).await.unwrap().foreground);

    // successful job promoted to the front
    assert_eq!(jobs.list().await[0].id, ok);
    assert_eq!(report.backgrounded().collect::<Vec<_>>(), vec![ok]);
}

#[tokio::test]
async fn test_pipeline_member_pid_finds_job() {
    let resumer = Arc::new(RecordingResumer::default());
    let jobs = manager(resumer.clone());
    let id = jobs
        .register(JobSpec::new("yes | head", 500).with_pids([501]).with_pgid(Some(500)))
        .await;
    jobs.mark_stopped(id).await;

    let report = background(jobs.as_ref(), &[Value::from("501")]).await;

    assert_eq!(report.status(), 0);
    assert_eq!(resumer.calls(), vec![500]);
}

#[tokio::test]
async fn test_completed_job_pid_is_not_resumed() {
    init_tracing();
    let resumer = Arc::new(RecordingResumer::default());
    let jobs = manager(resumer.clone());
    let id = jobs.register(JobSpec::new("ls", 30)).await;
    jobs.mark_completed(id, true).await;

    let report = background(jobs.as_ref(), &[Value::from("30")]).await;

    assert_eq!(report.status(), 0);
    assert_eq!(report.outcomes(), &[SpecifierOutcome::NotFound { pid: 30 }]);
    assert_eq!(report.diagnostics(), &["bg: Could not find job '30'".to_string()]);
    assert!(resumer.calls().is_empty());
    let info = jobs.get(id).await.unwrap();
    assert!(info.foreground);
    assert_eq!(info.status, JobStatus::Done);
}

#[tokio::test]
async fn test_backgrounding_running_job_twice_is_harmless() {
    let resumer = Arc::new(RecordingResumer::default());
    let jobs = manager(resumer.clone());
    let id = jobs.register(JobSpec::new("tail -f log", 42).in_background()).await;

    for _ in 0..2 {
        let report = background(jobs.as_ref(), &[Value::from("42")]).await;
        assert_eq!(report.status(), 0);
        match &report.outcomes()[0] {
            SpecifierOutcome::Handled { outcome, .. } => {
                assert_eq!(outcome.state, TransitionState::BackgroundActive)
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    assert_eq!(resumer.calls(), vec![42, 42]);
    let info = jobs.get(id).await.unwrap();
    assert!(!info.foreground);
    assert_eq!(info.status, JobStatus::Running);
}

// ============================================================================
// Kernel dispatch
// ============================================================================

#[tokio::test]
async fn test_kernel_bg_end_to_end() {
    let kernel = Kernel::transient().unwrap();
    let jobs = kernel.jobs();
    let a = jobs.register(JobSpec::new("sleep 1", 11)).await;
    let b = jobs.register(JobSpec::new("sleep 2", 22)).await;
    jobs.mark_stopped(a).await;
    jobs.mark_stopped(b).await;

    let result = kernel
        .execute("bg", ToolArgs::positional([Value::Int(11), Value::Int(22)]))
        .await
        .unwrap();

    assert!(result.ok());
    assert_eq!(
        result.err,
        "Send job 1 'sleep 1' to background\nSend job 2 'sleep 2' to background\n"
    );
    // last one handled is the most recent
    let order: Vec<JobId> = jobs.list().await.iter().map(|j| j.id).collect();
    assert_eq!(order, vec![b, a]);
}

#[tokio::test]
async fn test_kernel_schemas_include_bg() {
    let kernel = Kernel::transient().unwrap();
    let schemas = kernel.tools().schemas();
    assert_eq!(schemas.len(), 1);
    assert_eq!(schemas[0].name, "bg");
    assert!(schemas[0].params.iter().any(|p| p.matches_flag("h")));
}
