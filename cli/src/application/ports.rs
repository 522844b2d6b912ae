//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::Path;
use std::process::{ExitStatus, Output};

use anyhow::Result;

use crate::domain::{ConfigLayer, Invocation};

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
///
/// Implementations must honour `Invocation::cwd` and `Invocation::env` on the
/// child only and must never change the caller's working directory.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds the
    /// implementation's default timeout. On timeout the child must be killed.
    async fn run(&self, cmd: &Invocation) -> Result<Output>;

    /// Run a program with stdin piped from `input`, capturing its output.
    async fn run_with_stdin(&self, cmd: &Invocation, input: &[u8]) -> Result<Output>;

    /// Run a program with inherited stdio and return only its exit status.
    /// No timeout: used for builds, test runs and interactive Terraform.
    async fn run_status(&self, cmd: &Invocation) -> Result<ExitStatus>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait, no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

// ── Registry Port ─────────────────────────────────────────────────────────────

/// Read access to the container image registry.
#[allow(async_fn_in_trait)]
pub trait ImageRegistry {
    /// Every tag of every image in `repository`, in no particular order.
    async fn image_tags(&self, repository: &str) -> Result<Vec<String>>;
}

// ── Prompt Port ───────────────────────────────────────────────────────────────

/// Abstracts interactive confirmation.
pub trait UserPrompt {
    /// Ask a yes/no question; `default` applies when no answer can be read
    /// interactively.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal prompt fails.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// Abstracts symlink bookkeeping for Terraform workspaces.
pub trait LinkManager {
    /// Replace whatever exists at `link` (file, link or dangling link) with a
    /// symlink to the resolved `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if `target` cannot be resolved or the link cannot be
    /// written.
    fn ensure_symlink(&self, target: &Path, link: &Path) -> Result<()>;
}

// ── Configuration Port ────────────────────────────────────────────────────────

/// Abstracts loading of project configuration layers.
pub trait ConfigStore {
    /// Load and merge every configuration layer, lowest precedence first.
    ///
    /// # Errors
    ///
    /// Returns an error if a layer exists but cannot be read or parsed.
    fn load(&self) -> Result<ConfigLayer>;
}
