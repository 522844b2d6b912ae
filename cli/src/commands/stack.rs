//! `cominty create_chat_table|update_chat_table`: chat history table stack.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::stack;

/// Arguments for the chat table stack commands.
#[derive(Args, Debug)]
pub struct StackArgs {
    /// Target environment: dev, staging or production
    #[arg(long)]
    pub env: String,
}

/// Run `cominty create_chat_table`.
///
/// # Errors
///
/// Returns an error if the environment is invalid or CloudFormation fails.
pub async fn create(app: &AppContext, args: &StackArgs) -> Result<()> {
    let root = app.project_root()?;
    let outcome =
        stack::create_chat_table(&app.runner, &app.prompt, &app.reporter(), &root, &args.env)
            .await?;
    tracing::debug!(?outcome, "create_chat_table finished");
    Ok(())
}

/// Run `cominty update_chat_table`.
///
/// # Errors
///
/// Returns an error if the environment is invalid or CloudFormation fails.
pub async fn update(app: &AppContext, args: &StackArgs) -> Result<()> {
    let root = app.project_root()?;
    let outcome =
        stack::update_chat_table(&app.runner, &app.prompt, &app.reporter(), &root, &args.env)
            .await?;
    tracing::debug!(?outcome, "update_chat_table finished");
    Ok(())
}
