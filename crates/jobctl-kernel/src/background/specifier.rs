//! Turning `bg` arguments into target jobs.

use jobctl_types::Value;

use crate::scheduler::{JobControl, JobInfo};

/// Which job the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Specifier {
    /// No argument: the most recent stopped job.
    Implicit,
    /// A process id belonging to the job.
    Pid(u32),
}

/// Where resolution ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// No arguments; this job was picked.
    Default(JobInfo),
    /// No arguments and nothing to pick.
    NoEligibleJob,
    /// Every argument parsed. Pids in input order, with the owning live job
    /// if any.
    Explicit(Vec<(u32, Option<JobInfo>)>),
    /// At least one argument did not parse. Holds every bad token in order.
    Invalid(Vec<String>),
}

/// Parse one argument as a process id.
///
/// Pids are non-negative and fit in a `pid_t`. Surrounding whitespace is
/// allowed, like the shell's own integer conversion.
pub fn parse_pid(value: &Value) -> Option<u32> {
    let pid = match value {
        Value::Int(i) => i32::try_from(*i).ok()?,
        Value::String(s) => s.trim().parse::<i32>().ok()?,
        _ => return None,
    };
    u32::try_from(pid).ok()
}

/// Parse every argument before any of them is used.
///
/// Either all tokens are pids, or the error lists every token that is not.
pub fn parse_specifiers(tokens: &[Value]) -> Result<Vec<u32>, Vec<String>> {
    let mut pids = Vec::with_capacity(tokens.len());
    let mut invalid = Vec::new();

    for token in tokens {
        match parse_pid(token) {
            Some(pid) => pids.push(pid),
            None => invalid.push(token.to_word()),
        }
    }

    if invalid.is_empty() {
        Ok(pids)
    } else {
        Err(invalid)
    }
}

/// Resolve `bg` arguments against the job table.
///
/// A pid owned by a completed job resolves to no job.
pub async fn resolve(control: &dyn JobControl, tokens: &[Value]) -> Resolution {
    if tokens.is_empty() {
        return match control.last_stopped().await {
            Some(job) => Resolution::Default(job),
            None => Resolution::NoEligibleJob,
        };
    }

    let pids = match parse_specifiers(tokens) {
        Ok(pids) => pids,
        Err(invalid) => return Resolution::Invalid(invalid),
    };

    let mut resolved = Vec::with_capacity(pids.len());
    for pid in pids {
        let job = control.find_by_pid(pid).await.filter(|j| !j.is_completed());
        resolved.push((pid, job));
    }
    Resolution::Explicit(resolved)
}
