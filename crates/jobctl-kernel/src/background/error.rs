use thiserror::Error;

use jobctl_types::{STATUS_CMD_ERROR, STATUS_CMD_OK, STATUS_INVALID_ARGS};

use crate::scheduler::{JobControlError, JobId};

/// Everything that can go wrong while backgrounding jobs.
///
/// The `Display` text is the diagnostic line shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackgroundError {
    /// No arguments and no stopped job to pick.
    #[error("bg: There are no suitable jobs")]
    NoEligibleJob,

    #[error("bg: '{0}' is not a valid job specifier")]
    InvalidSpecifier(String),

    /// Informational: the pid is well formed but no job owns it.
    #[error("bg: Could not find job '{0}'")]
    JobNotFound(u32),

    #[error("bg: Can't put job {id}, '{command}' to background because it is not under job control")]
    NotJobControlled { id: JobId, command: String },

    #[error("bg: Could not resume job {id}, '{command}': {source}")]
    ResumeFailed {
        id: JobId,
        command: String,
        source: JobControlError,
    },
}

impl BackgroundError {
    /// Exit status bit this error contributes to the batch.
    pub fn status(&self) -> i64 {
        match self {
            BackgroundError::JobNotFound(_) => STATUS_CMD_OK,
            BackgroundError::InvalidSpecifier(_) => STATUS_INVALID_ARGS,
            BackgroundError::NoEligibleJob
            | BackgroundError::NotJobControlled { .. }
            | BackgroundError::ResumeFailed { .. } => STATUS_CMD_ERROR,
        }
    }
}
