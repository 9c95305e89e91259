//! Backgrounding jobs — the logic behind `bg`.
//!
//! ```text
//! tokens ──▶ resolve() ──▶ Resolution ──▶ send_to_background() per job ──▶ BackgroundReport
//!                                                                        (outcomes, diagnostics, OR status)
//! ```
//!
//! All arguments are parsed before any job is looked up. If one of them is
//! not a pid, nothing is touched and every bad token is reported. Otherwise
//! each pid is handled in input order and one failing job does not stop the
//! others.

mod error;
mod outcome;
mod specifier;
mod transition;

pub use error::BackgroundError;
pub use outcome::{BackgroundReport, JobOutcome, SpecifierOutcome, TransitionState};
pub use specifier::{parse_pid, parse_specifiers, resolve, Resolution, Specifier};
pub use transition::send_to_background;

use jobctl_types::Value;

use crate::scheduler::JobControl;

/// Background the jobs named by `tokens`, or the most recent stopped job
/// when there are none.
#[tracing::instrument(level = "debug", skip(control, tokens), fields(specifiers = tokens.len()))]
pub async fn background(control: &dyn JobControl, tokens: &[Value]) -> BackgroundReport {
    let mut report = BackgroundReport::new();

    match resolve(control, tokens).await {
        Resolution::NoEligibleJob => {
            report.note(BackgroundError::NoEligibleJob.to_string());
            report.record(SpecifierOutcome::NoEligibleJob);
        }
        Resolution::Default(job) => {
            tracing::debug!(job = %job.id, "picked most recent stopped job");
            let outcome = send_to_background(control, &job, &mut report).await;
            report.record(SpecifierOutcome::Handled {
                specifier: Specifier::Implicit,
                outcome,
            });
        }
        Resolution::Invalid(tokens) => {
            for token in tokens {
                report.note(BackgroundError::InvalidSpecifier(token.clone()).to_string());
                report.record(SpecifierOutcome::Invalid { token });
            }
        }
        Resolution::Explicit(targets) => {
            for (pid, job) in targets {
                match job {
                    Some(job) => {
                        let outcome = send_to_background(control, &job, &mut report).await;
                        report.record(SpecifierOutcome::Handled {
                            specifier: Specifier::Pid(pid),
                            outcome,
                        });
                    }
                    None => {
                        report.note(BackgroundError::JobNotFound(pid).to_string());
                        report.record(SpecifierOutcome::NotFound { pid });
                    }
                }
            }
        }
    }

    tracing::debug!(status = report.status(), "bg finished");
    report
}
