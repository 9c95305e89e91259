//! Kernel configuration.
//!
//! Loaded from `~/.config/jobctl/jobctl.toml`; every field has a default, so
//! a missing file or an empty one both work.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::scheduler::JobControlMode;

/// How the kernel continues stopped jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResumeStrategy {
    /// SIGCONT to the job's process group.
    #[default]
    Signal,
    /// Bookkeeping only; the embedder continues processes itself.
    Noop,
}

/// Configuration for a jobctl kernel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KernelConfig {
    /// Name of this kernel (for identification in logs).
    #[serde(default = "default_name")]
    pub name: String,

    /// Whether the kernel drives an interactive terminal session.
    #[serde(default)]
    pub interactive: bool,

    /// Which jobs run under job control.
    #[serde(default)]
    pub job_control: JobControlMode,

    /// How stopped jobs are continued.
    #[serde(default)]
    pub resume: ResumeStrategy,

    /// Default `tracing-subscriber` filter for embedders.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_name() -> String {
    "default".to_string()
}

fn default_log_filter() -> String {
    "jobctl_kernel=info".to_string()
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            interactive: false,
            job_control: JobControlMode::default(),
            resume: ResumeStrategy::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl KernelConfig {
    /// A throwaway config that never signals real processes.
    pub fn transient() -> Self {
        Self {
            name: "transient".to_string(),
            resume: ResumeStrategy::Noop,
            ..Self::default()
        }
    }

    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_or_default(&Self::config_path()?)
    }

    /// Load configuration from `path`, or defaults if there is no file.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        Self::load_from(path)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Get the default config file path.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "jobctl")
            .context("Could not determine config directory")?;

        Ok(dirs.config_dir().join("jobctl.toml"))
    }
}
