//! The jobctl kernel: a job table plus the builtins that act on it.
//!
//! Embedders register the jobs they launch with [`Kernel::jobs`] and run
//! builtins through [`Kernel::execute`].

use std::sync::Arc;

use anyhow::Result;

use jobctl_types::ExecResult;

use crate::config::{KernelConfig, ResumeStrategy};
use crate::scheduler::{JobManager, NoopResumer, Resumer, SignalResumer};
use crate::tools::{register_builtins, ExecContext, ToolArgs, ToolRegistry};

/// Exit status for a command that does not exist.
pub const STATUS_CMD_UNKNOWN: i64 = 127;

/// A job-control kernel.
pub struct Kernel {
    config: KernelConfig,
    jobs: Arc<JobManager>,
    tools: Arc<ToolRegistry>,
}

impl Kernel {
    /// Create a kernel from configuration.
    pub fn new(config: KernelConfig) -> Result<Self> {
        let resumer: Arc<dyn Resumer> = match config.resume {
            ResumeStrategy::Signal => Arc::new(SignalResumer),
            ResumeStrategy::Noop => Arc::new(NoopResumer),
        };

        let jobs = JobManager::with_resumer(resumer).with_mode(config.job_control, config.interactive);

        let mut registry = ToolRegistry::new();
        register_builtins(&mut registry);

        tracing::debug!(
            name = %config.name,
            job_control = ?config.job_control,
            resume = ?config.resume,
            "kernel created"
        );

        Ok(Self {
            config,
            jobs: Arc::new(jobs),
            tools: Arc::new(registry),
        })
    }

    /// Create a kernel that never signals real processes.
    pub fn transient() -> Result<Self> {
        Self::new(KernelConfig::transient())
    }

    /// Create a kernel from the user's config file.
    pub fn from_user_config() -> Result<Self> {
        Self::new(KernelConfig::load()?)
    }

    /// The kernel's configuration.
    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    /// The job table.
    pub fn jobs(&self) -> Arc<JobManager> {
        self.jobs.clone()
    }

    /// The tool registry.
    pub fn tools(&self) -> Arc<ToolRegistry> {
        self.tools.clone()
    }

    /// Run a builtin by name.
    ///
    /// Unknown commands produce a failed result, not an error.
    #[tracing::instrument(level = "info", skip(self, args), fields(kernel = %self.config().name, command = %name))]
    pub async fn execute(&self, name: &str, args: ToolArgs) -> Result<ExecResult> {
        let Some(tool) = self.tools.get(name) else {
            return Ok(ExecResult::failure(
                STATUS_CMD_UNKNOWN,
                format!("{}: command not found\n", name),
            ));
        };

        let mut ctx = ExecContext::with_job_control(self.jobs.clone());

        let result = tool.execute(args, &mut ctx).await;
        tracing::debug!(code = result.code, "command finished");
        Ok(result)
    }
}
