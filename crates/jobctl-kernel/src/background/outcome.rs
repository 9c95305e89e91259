//! Per-specifier results and their aggregate.

use jobctl_types::{ExecResult, STATUS_CMD_OK};

use super::specifier::Specifier;
use super::BackgroundError;
use crate::scheduler::JobId;

/// Where a job ended up while `bg` handled it.
///
/// Only the foreground flag outlives the command; the rest is reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionState {
    /// Picked up, nothing changed yet.
    ForegroundManaged,
    /// Refused: not under job control.
    Rejected,
    /// Foreground flag cleared, not yet continued.
    BackgroundPending,
    /// Continued in the background.
    BackgroundActive,
    /// Foreground flag cleared but the job could not be continued.
    BackgroundFailed,
}

/// What happened to one job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobOutcome {
    pub job: JobId,
    pub state: TransitionState,
    pub error: Option<BackgroundError>,
}

impl JobOutcome {
    pub fn status(&self) -> i64 {
        self.error.as_ref().map_or(STATUS_CMD_OK, BackgroundError::status)
    }
}

/// What happened to one argument (or to the implicit pick).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecifierOutcome {
    /// A job was found and run through the transition.
    Handled { specifier: Specifier, outcome: JobOutcome },
    /// The pid matched no job.
    NotFound { pid: u32 },
    /// The token was not a pid; nothing was touched.
    Invalid { token: String },
    /// No arguments and no job to pick.
    NoEligibleJob,
}

impl SpecifierOutcome {
    /// Exit status bit contributed by this outcome.
    pub fn status(&self) -> i64 {
        match self {
            SpecifierOutcome::Handled { outcome, .. } => outcome.status(),
            SpecifierOutcome::NotFound { pid } => BackgroundError::JobNotFound(*pid).status(),
            SpecifierOutcome::Invalid { token } => BackgroundError::InvalidSpecifier(token.clone()).status(),
            SpecifierOutcome::NoEligibleJob => BackgroundError::NoEligibleJob.status(),
        }
    }
}

/// Everything one `bg` invocation did, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackgroundReport {
    outcomes: Vec<SpecifierOutcome>,
    diagnostics: Vec<String>,
}

impl BackgroundReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a diagnostic line.
    pub fn note(&mut self, line: impl Into<String>) {
        self.diagnostics.push(line.into());
    }

    /// Record the outcome for the next specifier.
    pub fn record(&mut self, outcome: SpecifierOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[SpecifierOutcome] {
        &self.outcomes
    }

    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    /// Jobs that were actually continued.
    pub fn backgrounded(&self) -> impl Iterator<Item = JobId> + '_ {
        self.outcomes.iter().filter_map(|o| match o {
            SpecifierOutcome::Handled { outcome, .. } if outcome.state == TransitionState::BackgroundActive => {
                Some(outcome.job)
            }
            _ => None,
        })
    }

    /// Bitwise OR of every outcome's status.
    pub fn status(&self) -> i64 {
        self.outcomes.iter().fold(STATUS_CMD_OK, |acc, o| acc | o.status())
    }

    /// Render as a builtin result: diagnostics on stderr, folded status.
    pub fn into_exec_result(self) -> ExecResult {
        let code = self.status();
        let mut err = String::new();
        for line in &self.diagnostics {
            err.push_str(line);
            err.push('\n');
        }
        ExecResult::from_output(code, String::new(), err)
    }
}
