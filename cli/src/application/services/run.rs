//! Application service: run the project image locally.

use std::path::Path;

use anyhow::Result;

use crate::application::ports::{CommandRunner, ProgressReporter};
use crate::application::services::container;
use crate::application::services::exec::run_checked;
use crate::application::services::quality::{self, Preflight};
use crate::domain::container::{self as image, BuildOptions, ImagePresence};
use crate::domain::ProjectConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerOptions {
    pub preflight: Preflight,
    /// Bind sources and credentials into the container and build for the host.
    pub local: bool,
    pub force_build: bool,
    pub no_cache: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatOptions {
    pub preflight: Preflight,
    pub force_build: bool,
}

/// Run the service container, building the image first when `presence`
/// says it is missing or a rebuild is forced.
pub async fn server(
    runner: &impl CommandRunner,
    reporter: &impl ProgressReporter,
    project: &ProjectConfig,
    home: &Path,
    opts: ServerOptions,
    presence: ImagePresence,
) -> Result<()> {
    quality::preflight(runner, reporter, &project.project_root, opts.preflight).await?;

    if presence.needs_build(opts.force_build) {
        let build = BuildOptions {
            remote: !opts.local,
            no_cache: opts.no_cache,
            debug: false,
        };
        container::build(runner, reporter, project, Preflight::SKIP, build).await?;
    } else {
        reporter.step("Skipping the build step");
    }

    reporter.step("Starting server container...");
    run_checked(runner, &image::run_server(project, opts.local, home)).await
}

/// Run the chat frontend container, building a host-platform image first when
/// needed.
pub async fn chat(
    runner: &impl CommandRunner,
    reporter: &impl ProgressReporter,
    project: &ProjectConfig,
    home: &Path,
    opts: ChatOptions,
    presence: ImagePresence,
) -> Result<()> {
    quality::preflight(runner, reporter, &project.project_root, opts.preflight).await?;

    if presence.needs_build(opts.force_build) {
        let build = BuildOptions {
            remote: false,
            ..BuildOptions::default()
        };
        container::build(runner, reporter, project, Preflight::SKIP, build).await?;
    } else {
        reporter.step("Skipping the build step");
    }

    reporter.step("Starting chat container...");
    run_checked(runner, &image::run_chat(project, home)).await
}
