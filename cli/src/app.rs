//! Application context: unified state passed to every command handler.
//!
//! `AppContext` bundles the output context with the production adapters for
//! every application port. Adding a new cross-cutting concern requires only
//! one field change here, and no command signatures change.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::ConfigStore;
use crate::domain::ProjectConfig;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::config::EnvConfigStore;
use crate::infra::fs::LocalLinks;
use crate::infra::prompt::DialoguerPrompt;
use crate::output::{OutputContext, TerminalReporter};

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
}

/// Behaviour flags.
pub struct BehaviourFlags {
    /// Answer yes to confirmation prompts.
    pub yes: bool,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Output rendering options.
    pub output: OutputFlags,
    /// Behaviour options.
    pub behaviour: BehaviourFlags,
}

/// Unified application context passed to every command handler.
///
/// Constructed once in `Cli::run()` and passed as `&AppContext` to all
/// command handlers.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// External process runner.
    pub runner: TokioCommandRunner,
    /// Confirmation prompt.
    pub prompt: DialoguerPrompt,
    /// Symlink bookkeeping for Terraform workspaces.
    pub links: LocalLinks,
    /// Project configuration source.
    pub config: EnvConfigStore,
    /// Directory the CLI was started in. Never changed afterwards.
    pub cwd: PathBuf,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// `CI` or `COMINTY_YES` in the environment make the session
    /// non-interactive: prompts fall back to their default answer.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn new(flags: &AppFlags) -> Result<Self> {
        let ci_env = std::env::var("CI").is_ok() || std::env::var("COMINTY_YES").is_ok();
        let cwd = std::env::current_dir().context("cannot determine current directory")?;

        Ok(Self {
            output: OutputContext::new(flags.output.no_color, flags.output.quiet),
            runner: TokioCommandRunner::default(),
            prompt: DialoguerPrompt::new(flags.behaviour.yes, ci_env),
            links: LocalLinks,
            config: EnvConfigStore::new(cwd.clone()),
            cwd,
        })
    }

    /// Progress reporter writing to this context's terminal.
    #[must_use]
    pub fn reporter(&self) -> TerminalReporter<'_> {
        TerminalReporter::new(&self.output)
    }

    /// Fully resolved project configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or a required key
    /// is missing.
    pub fn project(&self) -> Result<ProjectConfig> {
        let project = self.config.load()?.resolve(&self.cwd)?;
        tracing::debug!(?project, "resolved configuration");
        Ok(project)
    }

    /// Project root only; registry keys are not required.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn project_root(&self) -> Result<PathBuf> {
        Ok(self.config.load()?.root(&self.cwd))
    }
}
