//! `cominty server|chat`: run the project image locally.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::quality::Preflight;
use crate::application::services::{container, run};
use crate::domain::{ImagePresence, ProjectConfig};

/// Arguments for the server command.
#[derive(Args, Debug)]
pub struct ServerArgs {
    /// Skip `cargo fmt` before starting
    #[arg(long)]
    pub no_format: bool,

    /// Skip clippy before starting
    #[arg(long)]
    pub no_check: bool,

    /// Mount the source tree and AWS credentials, debug logging (default)
    #[arg(long, overrides_with = "no_local")]
    pub local: bool,

    /// Run the image as deployed, built for linux/amd64
    #[arg(long, overrides_with = "local")]
    pub no_local: bool,

    /// Rebuild the image even if it exists
    #[arg(long)]
    pub force_build: bool,

    /// Build without the docker layer cache
    #[arg(long)]
    pub no_cache: bool,
}

/// Arguments for the chat command.
#[derive(Args, Debug)]
pub struct ChatArgs {
    /// Skip `cargo fmt` before starting
    #[arg(long)]
    pub no_format: bool,

    /// Skip clippy before starting
    #[arg(long)]
    pub no_check: bool,

    /// Rebuild the image even if it exists
    #[arg(long)]
    pub force_build: bool,
}

/// Pre-step for `server` and `chat`: is `<project>:latest` present locally?
///
/// # Errors
///
/// Returns an error if docker cannot be spawned.
pub async fn image_exists(app: &AppContext, project: &ProjectConfig) -> Result<ImagePresence> {
    container::image_presence(&app.runner, &app.reporter(), &project.local_image()).await
}

/// Run `cominty server`.
///
/// # Errors
///
/// Returns an error if a preflight step, the build or the container fails.
pub async fn server(
    app: &AppContext,
    args: &ServerArgs,
    project: &ProjectConfig,
    presence: ImagePresence,
) -> Result<()> {
    let opts = run::ServerOptions {
        preflight: Preflight::from_skips(args.no_format, args.no_check),
        local: !args.no_local,
        force_build: args.force_build,
        no_cache: args.no_cache,
    };
    run::server(&app.runner, &app.reporter(), project, &home()?, opts, presence).await
}

/// Run `cominty chat`.
///
/// # Errors
///
/// Returns an error if a preflight step, the build or the container fails.
pub async fn chat(
    app: &AppContext,
    args: &ChatArgs,
    project: &ProjectConfig,
    presence: ImagePresence,
) -> Result<()> {
    let opts = run::ChatOptions {
        preflight: Preflight::from_skips(args.no_format, args.no_check),
        force_build: args.force_build,
    };
    run::chat(&app.runner, &app.reporter(), project, &home()?, opts, presence).await
}

fn home() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))
}
