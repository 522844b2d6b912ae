//! Application service: chat table CloudFormation stack.

use std::path::Path;

use anyhow::Result;

use crate::application::ports::{CommandRunner, ProgressReporter, UserPrompt};
use crate::application::services::exec::capture_checked;
use crate::domain::environment::Environment;
use crate::domain::stack::ChatTableStack;

/// Result of a stack command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackOutcome {
    Applied,
    /// The user declined the confirmation; nothing was sent to AWS.
    Aborted,
}

fn announce(
    prompt: &impl UserPrompt,
    reporter: &impl ProgressReporter,
    verb: &str,
    stack: &ChatTableStack,
) -> Result<bool> {
    reporter.step(&format!("{verb} stack {}", stack.name()));
    reporter.step(&format!("Using template {}", stack.template().display()));
    if prompt.confirm("Do you want to proceed?", false)? {
        return Ok(true);
    }
    reporter.warn("Aborting...");
    Ok(false)
}

/// Create the stack, then enable termination protection on it.
pub async fn create_chat_table(
    runner: &impl CommandRunner,
    prompt: &impl UserPrompt,
    reporter: &impl ProgressReporter,
    root: &Path,
    env: &str,
) -> Result<StackOutcome> {
    let env: Environment = env.parse()?;
    let stack = ChatTableStack::new(root, env);
    if !announce(prompt, reporter, "Creating", &stack)? {
        return Ok(StackOutcome::Aborted);
    }

    reporter.step("Creating stack...");
    capture_checked(runner, &stack.create()).await?;
    reporter.success("Stack created successfully");

    reporter.step("Enabling termination protection...");
    capture_checked(runner, &stack.enable_termination_protection()).await?;
    reporter.success("Termination protection enabled");

    Ok(StackOutcome::Applied)
}

pub async fn update_chat_table(
    runner: &impl CommandRunner,
    prompt: &impl UserPrompt,
    reporter: &impl ProgressReporter,
    root: &Path,
    env: &str,
) -> Result<StackOutcome> {
    let env: Environment = env.parse()?;
    let stack = ChatTableStack::new(root, env);
    if !announce(prompt, reporter, "Updating", &stack)? {
        return Ok(StackOutcome::Aborted);
    }

    reporter.step("Updating stack...");
    capture_checked(runner, &stack.update()).await?;
    reporter.success("Stack updated successfully");

    Ok(StackOutcome::Applied)
}
