//! Application service: formatting, linting and tests.

use std::path::Path;

use anyhow::Result;

use crate::application::ports::{CommandRunner, ProgressReporter};
use crate::application::services::exec::run_checked;
use crate::domain::toolchain::{self, TestOptions};

/// Which quality steps run before a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preflight {
    pub format: bool,
    pub check: bool,
}

impl Preflight {
    /// No quality steps.
    pub const SKIP: Preflight = Preflight {
        format: false,
        check: false,
    };

    /// Built from the `--no-format` / `--no-check` switches.
    #[must_use]
    pub fn from_skips(no_format: bool, no_check: bool) -> Self {
        Self {
            format: !no_format,
            check: !no_check,
        }
    }
}

pub async fn format(
    runner: &impl CommandRunner,
    reporter: &impl ProgressReporter,
    root: &Path,
) -> Result<()> {
    reporter.step("Formatting code with rustfmt...");
    run_checked(runner, &toolchain::format(root)).await
}

pub async fn check(
    runner: &impl CommandRunner,
    reporter: &impl ProgressReporter,
    root: &Path,
) -> Result<()> {
    reporter.step("Checking code quality with clippy...");
    run_checked(runner, &toolchain::check(root)).await
}

pub async fn test(
    runner: &impl CommandRunner,
    reporter: &impl ProgressReporter,
    root: &Path,
    opts: TestOptions,
) -> Result<()> {
    reporter.step("Running tests...");
    run_checked(runner, &toolchain::test(root, opts)).await
}

/// Format, check and test in that order, stopping at the first failure.
pub async fn all(
    runner: &impl CommandRunner,
    reporter: &impl ProgressReporter,
    root: &Path,
) -> Result<()> {
    format(runner, reporter, root).await?;
    check(runner, reporter, root).await?;
    test(runner, reporter, root, TestOptions::default()).await?;
    reporter.success("Formatted, checked and tested");
    Ok(())
}

/// Run the selected pre-build quality steps.
pub async fn preflight(
    runner: &impl CommandRunner,
    reporter: &impl ProgressReporter,
    root: &Path,
    steps: Preflight,
) -> Result<()> {
    if steps.format {
        format(runner, reporter, root).await?;
    }
    if steps.check {
        check(runner, reporter, root).await?;
    }
    Ok(())
}
