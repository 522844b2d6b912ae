//! `cominty plan|apply|destroy`: Terraform against one environment workspace.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::terraform::{self, PlanOptions};

/// Arguments for the plan command.
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Environment workspace: dev, staging or production
    #[arg(long)]
    pub workspace: String,

    /// Reconfigure the backend instead of migrating state
    #[arg(long)]
    pub reconfigure: bool,

    /// Upgrade providers and modules during init
    #[arg(long)]
    pub upgrade: bool,
}

/// Arguments for the apply and destroy commands.
#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Environment workspace: dev, staging or production
    #[arg(long)]
    pub workspace: String,

    /// Skip Terraform's interactive approval
    #[arg(long)]
    pub auto_approve: bool,
}

/// Run `cominty plan`.
///
/// # Errors
///
/// Returns an error if the workspace is invalid or uninitialised, or a
/// Terraform step fails.
pub async fn plan(app: &AppContext, args: &PlanArgs) -> Result<()> {
    let root = app.project_root()?;
    let opts = PlanOptions {
        reconfigure: args.reconfigure,
        upgrade: args.upgrade,
    };
    terraform::plan(&app.runner, &app.links, &app.reporter(), &root, &args.workspace, opts).await
}

/// Run `cominty apply`.
///
/// # Errors
///
/// Returns an error if the workspace is invalid or uninitialised, or a
/// Terraform step fails.
pub async fn apply(app: &AppContext, args: &ApplyArgs) -> Result<()> {
    let root = app.project_root()?;
    terraform::apply(
        &app.runner,
        &app.links,
        &app.reporter(),
        &root,
        &args.workspace,
        args.auto_approve,
    )
    .await
}

/// Run `cominty destroy`.
///
/// # Errors
///
/// Returns an error if the workspace is invalid or uninitialised, or a
/// Terraform step fails.
pub async fn destroy(app: &AppContext, args: &ApplyArgs) -> Result<()> {
    let root = app.project_root()?;
    terraform::destroy(
        &app.runner,
        &app.links,
        &app.reporter(),
        &root,
        &args.workspace,
        args.auto_approve,
    )
    .await
}
