//! Success checks shared by every service.

use anyhow::Result;

use crate::application::ports::CommandRunner;
use crate::domain::{CommandError, Invocation};

/// Run `cmd` with inherited stdio and fail on a non-zero exit.
pub async fn run_checked(runner: &impl CommandRunner, cmd: &Invocation) -> Result<()> {
    let status = runner.run_status(cmd).await?;
    if !status.success() {
        return Err(CommandError::Failed {
            command: cmd.to_string(),
            code: status.code(),
        }
        .into());
    }
    Ok(())
}

/// Run `cmd` capturing output; return stdout, or fail with stderr verbatim.
pub async fn capture_checked(runner: &impl CommandRunner, cmd: &Invocation) -> Result<String> {
    let output = runner.run(cmd).await?;
    checked_stdout(cmd, &output)
}

/// Same as [`capture_checked`] with `input` piped to stdin.
pub async fn capture_checked_with_stdin(
    runner: &impl CommandRunner,
    cmd: &Invocation,
    input: &[u8],
) -> Result<String> {
    let output = runner.run_with_stdin(cmd, input).await?;
    checked_stdout(cmd, &output)
}

fn checked_stdout(cmd: &Invocation, output: &std::process::Output) -> Result<String> {
    if !output.status.success() {
        return Err(CommandError::FailedWithOutput {
            command: cmd.to_string(),
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
        .into());
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
