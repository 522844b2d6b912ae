//! `cominty format|check|test|all`: Rust toolchain tasks at the project root.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::quality;
use crate::domain::toolchain::TestOptions;

/// Arguments for the test command.
#[derive(Args, Debug)]
pub struct TestArgs {
    /// Show test output as it happens (`--nocapture`)
    #[arg(long)]
    pub verbose: bool,

    /// Quiet test run with compiler warnings silenced
    #[arg(long)]
    pub minimal: bool,
}

/// Run `cominty format`.
///
/// # Errors
///
/// Returns an error if `cargo fmt` fails.
pub async fn format(app: &AppContext) -> Result<()> {
    let root = app.project_root()?;
    quality::format(&app.runner, &app.reporter(), &root).await?;
    app.output.success("Code formatted");
    Ok(())
}

/// Run `cominty check`.
///
/// # Errors
///
/// Returns an error if clippy reports a problem.
pub async fn check(app: &AppContext) -> Result<()> {
    let root = app.project_root()?;
    quality::check(&app.runner, &app.reporter(), &root).await?;
    app.output.success("No issues found");
    Ok(())
}

/// Run `cominty test`.
///
/// # Errors
///
/// Returns an error if any test fails.
pub async fn test(app: &AppContext, args: &TestArgs) -> Result<()> {
    let root = app.project_root()?;
    let opts = TestOptions {
        verbose: args.verbose,
        minimal: args.minimal,
    };
    quality::test(&app.runner, &app.reporter(), &root, opts).await?;
    app.output.success("All tests passed");
    Ok(())
}

/// Run `cominty all`.
///
/// # Errors
///
/// Returns an error from the first failing step.
pub async fn all(app: &AppContext) -> Result<()> {
    let root = app.project_root()?;
    quality::all(&app.runner, &app.reporter(), &root).await
}
