//! jobctl-kernel: job control for an interactive shell.
//!
//! This crate provides:
//!
//! - **Scheduler**: the job table (`JobManager`), job groups, and the
//!   resumers that continue stopped process groups
//! - **Background**: resolving `bg` arguments and moving jobs to the
//!   background, with per-job outcomes and an OR-folded exit status
//! - **Tools**: the `Tool` trait, registry, and the `bg` builtin
//! - **Config**: TOML configuration under the user's config directory
//! - **Kernel**: a facade wiring the job table to the builtins

pub mod background;
pub mod config;
pub mod help;
pub mod kernel;
pub mod scheduler;
pub mod tools;

pub use background::{background, BackgroundError, BackgroundReport};
pub use config::{KernelConfig, ResumeStrategy};
pub use kernel::Kernel;
pub use scheduler::{JobControl, JobControlMode, JobManager, JobSpec};

// Data types, for embedders that only depend on the kernel
pub use jobctl_types::{ExecResult, JobId, JobInfo, JobStatus, Value};
