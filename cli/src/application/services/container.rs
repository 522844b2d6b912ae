//! Application service: image presence, build and publish.

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, ImageRegistry, ProgressReporter};
use crate::application::services::exec::{
    capture_checked, capture_checked_with_stdin, run_checked,
};
use crate::application::services::quality::{self, Preflight};
use crate::domain::container::{self, BuildOptions, ImagePresence};
use crate::domain::version::{self, Version, ensure_publishable};
use crate::domain::ProjectConfig;

/// Pre-step: does `image` already exist locally?
///
/// A failing `docker images` is reported as a missing image; the build that
/// follows surfaces the real error.
pub async fn image_presence(
    runner: &impl CommandRunner,
    reporter: &impl ProgressReporter,
    image: &str,
) -> Result<ImagePresence> {
    let output = runner.run(&container::image_ids(image)).await?;
    if !output.status.success() {
        tracing::warn!(
            image,
            stderr = %String::from_utf8_lossy(&output.stderr).trim(),
            "docker images failed, treating image as missing"
        );
        return Ok(ImagePresence::Missing);
    }
    let presence = ImagePresence::from_image_ids(&String::from_utf8_lossy(&output.stdout));
    match presence {
        ImagePresence::Present => {
            reporter.step(&format!("Found local image: {image}"));
        }
        ImagePresence::Missing => {
            reporter.step(&format!("Image {image} not found locally"));
        }
    }
    Ok(presence)
}

/// Optional quality steps, then `docker build`.
pub async fn build(
    runner: &impl CommandRunner,
    reporter: &impl ProgressReporter,
    project: &ProjectConfig,
    steps: Preflight,
    opts: BuildOptions,
) -> Result<()> {
    quality::preflight(runner, reporter, &project.project_root, steps).await?;

    let cmd = container::build(project, opts);
    reporter.step(&format!("Building docker image {}...", project.local_image()));
    tracing::debug!(remote = opts.remote, no_cache = opts.no_cache, debug = opts.debug, "build options");
    run_checked(runner, &cmd).await?;

    if opts.remote {
        reporter.success(&format!(
            "Project built successfully for platform {}",
            container::REMOTE_PLATFORM
        ));
    } else {
        reporter.success("Project built successfully");
    }
    Ok(())
}

/// Highest `vX.Y.Z` tag published for the project, if any.
pub async fn latest_published(
    registry: &impl ImageRegistry,
    project: &ProjectConfig,
) -> Result<Option<Version>> {
    let tags = registry
        .image_tags(&project.project_name)
        .await
        .with_context(|| format!("listing images of repository {}", project.project_name))?;
    Ok(version::latest_version(tags.iter().map(String::as_str)))
}

/// Publish the local image as `tag`.
///
/// The tag is validated and compared with the latest published version before
/// anything is sent to the registry.
pub async fn push(
    runner: &impl CommandRunner,
    registry: &impl ImageRegistry,
    reporter: &impl ProgressReporter,
    project: &ProjectConfig,
    tag: &str,
) -> Result<Version> {
    let candidate = Version::parse(tag)?;
    let latest = latest_published(registry, project).await?;
    ensure_publishable(candidate, latest)?;

    reporter.step("Logging in to ECR...");
    let password = capture_checked(runner, &container::registry_password(project)).await?;
    capture_checked_with_stdin(
        runner,
        &container::registry_login(project),
        password.trim().as_bytes(),
    )
    .await?;

    reporter.step("Tagging docker image...");
    run_checked(runner, &container::tag(project, candidate)).await?;

    reporter.step("Pushing project to ECR...");
    run_checked(runner, &container::push(project, candidate)).await?;

    reporter.success(&format!("Project pushed successfully as {candidate}"));
    Ok(candidate)
}
