//! `cominty build|push`: container image build and publication.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::container;
use crate::application::services::quality::Preflight;
use crate::domain::{BuildOptions, Version};
use crate::infra::registry::EcrRegistry;

/// Arguments for the build command.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Skip `cargo fmt` before building
    #[arg(long)]
    pub no_format: bool,

    /// Skip clippy before building
    #[arg(long)]
    pub no_check: bool,

    /// Build for the deployment platform, linux/amd64 (default)
    #[arg(long, overrides_with = "no_remote")]
    pub remote: bool,

    /// Build for the host platform
    #[arg(long, overrides_with = "remote")]
    pub no_remote: bool,

    /// Build without the docker layer cache
    #[arg(long)]
    pub no_cache: bool,

    /// Plain build progress output
    #[arg(long)]
    pub debug: bool,
}

impl BuildArgs {
    fn options(&self) -> BuildOptions {
        BuildOptions {
            remote: !self.no_remote,
            no_cache: self.no_cache,
            debug: self.debug,
        }
    }
}

/// Arguments for the push command.
#[derive(Args, Debug)]
pub struct PushArgs {
    /// Release tag to publish, e.g. v1.2.3
    #[arg(long = "version", value_name = "VERSION")]
    pub tag: String,
}

/// Run `cominty build`.
///
/// # Errors
///
/// Returns an error if configuration is incomplete or a step fails.
pub async fn build(app: &AppContext, args: &BuildArgs) -> Result<()> {
    let project = app.project()?;
    let steps = Preflight::from_skips(args.no_format, args.no_check);
    container::build(&app.runner, &app.reporter(), &project, steps, args.options()).await
}

/// Run `cominty push`.
///
/// # Errors
///
/// Returns an error if the tag is malformed or not newer than the latest
/// published version, or if login, tag or push fails.
pub async fn push(app: &AppContext, args: &PushArgs) -> Result<()> {
    // Reject malformed tags before touching configuration or AWS
    Version::parse(&args.tag)?;
    let project = app.project()?;
    let registry = EcrRegistry::connect(&project.aws_region).await;
    container::push(&app.runner, &registry, &app.reporter(), &project, &args.tag).await?;
    Ok(())
}
