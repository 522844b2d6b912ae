//! Application service: Terraform plan, apply and destroy per environment.
//!
//! The environment name is validated before anything touches the filesystem
//! or starts a process. Workspaces are selected, never created.

use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, LinkManager, ProgressReporter};
use crate::application::services::exec::{capture_checked, run_checked};
use crate::domain::environment::{Environment, ensure_workspace_initialized, parse_workspace_list};
use crate::domain::terraform::{InitMode, TerraformLayout};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlanOptions {
    pub reconfigure: bool,
    pub upgrade: bool,
}

/// Validate `workspace` and link the shared settings into its directory.
fn prepare(links: &impl LinkManager, root: &Path, workspace: &str) -> Result<TerraformLayout> {
    let env: Environment = workspace.parse()?;
    let layout = TerraformLayout::new(root, env);
    links
        .ensure_symlink(&layout.global_settings(), &layout.settings_link())
        .with_context(|| format!("linking settings.tf into workspace {env}"))?;
    Ok(layout)
}

/// Select the layout's workspace, failing when it has not been created yet.
pub async fn check_and_switch(
    runner: &impl CommandRunner,
    reporter: &impl ProgressReporter,
    layout: &TerraformLayout,
) -> Result<()> {
    let listing = capture_checked(runner, &layout.workspace_list()).await?;
    let existing = parse_workspace_list(&listing);
    tracing::debug!(?existing, "terraform workspaces");
    ensure_workspace_initialized(layout.env(), &existing)?;

    reporter.step(&format!("Selecting workspace {}", layout.env()));
    run_checked(runner, &layout.workspace_select()).await
}

pub async fn plan(
    runner: &impl CommandRunner,
    links: &impl LinkManager,
    reporter: &impl ProgressReporter,
    root: &Path,
    workspace: &str,
    opts: PlanOptions,
) -> Result<()> {
    let layout = prepare(links, root, workspace)?;

    reporter.step("Initializing Terraform...");
    let mode = InitMode::Backend {
        reconfigure: opts.reconfigure,
        upgrade: opts.upgrade,
    };
    run_checked(runner, &layout.init(mode)).await?;

    check_and_switch(runner, reporter, &layout).await?;

    reporter.step(&format!("Planning {}...", layout.env()));
    run_checked(runner, &layout.plan()).await
}

pub async fn apply(
    runner: &impl CommandRunner,
    links: &impl LinkManager,
    reporter: &impl ProgressReporter,
    root: &Path,
    workspace: &str,
    auto_approve: bool,
) -> Result<()> {
    let layout = prepare(links, root, workspace)?;

    check_and_switch(runner, reporter, &layout).await?;

    reporter.step(&format!("Applying {}...", layout.env()));
    run_checked(runner, &layout.apply(auto_approve)).await
}

pub async fn destroy(
    runner: &impl CommandRunner,
    links: &impl LinkManager,
    reporter: &impl ProgressReporter,
    root: &Path,
    workspace: &str,
    auto_approve: bool,
) -> Result<()> {
    let layout = prepare(links, root, workspace)?;

    reporter.step("Initializing Terraform...");
    run_checked(runner, &layout.init(InitMode::Plain)).await?;

    check_and_switch(runner, reporter, &layout).await?;

    reporter.step(&format!("Destroying {}...", layout.env()));
    run_checked(runner, &layout.destroy(auto_approve)).await
}
