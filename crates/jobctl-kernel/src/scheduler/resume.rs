//! Resumers continue a stopped job's process group.

use thiserror::Error;

use crate::scheduler::JobId;

/// Why a job could not be continued.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResumeError {
    #[error("job {0} has no process group")]
    NoProcessGroup(JobId),
    #[error("failed to continue process group {pgid}: {reason}")]
    Signal { pgid: u32, reason: String },
    #[error("job control not supported on this platform")]
    Unsupported,
}

/// Makes a process group runnable again.
///
/// Resuming a group that is already running succeeds.
pub trait Resumer: Send + Sync {
    fn resume(&self, pgid: u32) -> Result<(), ResumeError>;
}

/// Sends SIGCONT to the whole process group.
///
/// Group ids 0 and 1 are refused: `killpg` would turn them into the
/// caller's own group or every process the user may signal.
#[derive(Debug, Default, Clone, Copy)]
pub struct SignalResumer;

impl Resumer for SignalResumer {
    #[cfg(unix)]
    fn resume(&self, pgid: u32) -> Result<(), ResumeError> {
        use nix::sys::signal::{killpg, Signal};
        use nix::unistd::Pid;

        if pgid <= 1 {
            return Err(ResumeError::Signal {
                pgid,
                reason: "refusing to signal a reserved process group".to_string(),
            });
        }
        let raw = i32::try_from(pgid).map_err(|_| ResumeError::Signal {
            pgid,
            reason: "process group id out of range".to_string(),
        })?;
        killpg(Pid::from_raw(raw), Signal::SIGCONT).map_err(|e| ResumeError::Signal {
            pgid,
            reason: e.to_string(),
        })
    }

    #[cfg(not(unix))]
    fn resume(&self, _pgid: u32) -> Result<(), ResumeError> {
        Err(ResumeError::Unsupported)
    }
}

/// Accepts every resume request without touching any process.
///
/// For embedders that drive their processes themselves and only want the
/// bookkeeping.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopResumer;

impl Resumer for NoopResumer {
    fn resume(&self, _pgid: u32) -> Result<(), ResumeError> {
        Ok(())
    }
}
