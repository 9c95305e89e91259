//! Moving a single job to the background.

use super::outcome::{BackgroundReport, JobOutcome, TransitionState};
use super::BackgroundError;
use crate::scheduler::{GroupRequest, JobControl, JobInfo};

/// Put one resolved job in the background.
///
/// Diagnostics go to `report`; the caller records the returned outcome.
/// When the job cannot be continued its foreground flag stays cleared.
pub async fn send_to_background(
    control: &dyn JobControl,
    job: &JobInfo,
    report: &mut BackgroundReport,
) -> JobOutcome {
    let mut state = TransitionState::ForegroundManaged;
    tracing::trace!(job = %job.id, ?state, "transition start");

    if !job.wants_job_control {
        let error = BackgroundError::NotJobControlled {
            id: job.id,
            command: job.command.clone(),
        };
        report.note(error.to_string());
        state = TransitionState::Rejected;
        tracing::debug!(job = %job.id, ?state, "job is not under job control");
        return JobOutcome { job: job.id, state, error: Some(error) };
    }

    report.note(format!("Send job {} '{}' to background", job.id, job.command));

    let continued = match control.request(GroupRequest::background(job.id)).await {
        Ok(()) => {
            state = TransitionState::BackgroundPending;
            tracing::trace!(job = %job.id, ?state, "foreground flag cleared");
            control.resume(job.id).await
        }
        Err(e) => Err(e),
    };

    if let Err(source) = continued {
        state = TransitionState::BackgroundFailed;
        tracing::warn!(job = %job.id, ?state, error = %source, "failed to resume job");
        let error = BackgroundError::ResumeFailed {
            id: job.id,
            command: job.command.clone(),
            source,
        };
        report.note(error.to_string());
        return JobOutcome { job: job.id, state, error: Some(error) };
    }

    control.promote(job.id).await;
    state = TransitionState::BackgroundActive;
    tracing::info!(job = %job.id, command = %job.command, "job sent to background");
    JobOutcome { job: job.id, state, error: None }
}
