//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags, BehaviourFlags, OutputFlags};
use crate::commands;

/// Build, run, publish and deploy the cominty service
#[derive(Parser)]
#[command(
    name = "cominty",
    version,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Answer yes to confirmation prompts
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Format the code with rustfmt
    Format,

    /// Type-check and lint the code with clippy
    Check,

    /// Run the test suite
    #[command(alias = "tests")]
    Test(commands::quality::TestArgs),

    /// Format, check and test
    All,

    /// Build the docker image
    Build(commands::container::BuildArgs),

    /// Publish the image to ECR under a new version tag
    Push(commands::container::PushArgs),

    /// Run the server container
    Server(commands::run::ServerArgs),

    /// Run the chat container
    Chat(commands::run::ChatArgs),

    /// Terraform plan for an environment
    Plan(commands::terraform::PlanArgs),

    /// Terraform apply for an environment
    Apply(commands::terraform::ApplyArgs),

    /// Terraform destroy for an environment
    Destroy(commands::terraform::ApplyArgs),

    /// Create the chat history table stack
    #[command(name = "create_chat_table", alias = "create-chat-table")]
    CreateChatTable(commands::stack::StackArgs),

    /// Update the chat history table stack
    #[command(name = "update_chat_table", alias = "update-chat-table")]
    UpdateChatTable(commands::stack::StackArgs),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            quiet,
            no_color,
            yes,
            verbose: _,
            command,
        } = self;

        let app = AppContext::new(&AppFlags {
            output: OutputFlags { no_color, quiet },
            behaviour: BehaviourFlags { yes },
        })?;

        match command {
            Command::Format => commands::quality::format(&app).await,
            Command::Check => commands::quality::check(&app).await,
            Command::Test(args) => commands::quality::test(&app, &args).await,
            Command::All => commands::quality::all(&app).await,
            Command::Build(args) => commands::container::build(&app, &args).await,
            Command::Push(args) => commands::container::push(&app, &args).await,
            Command::Server(args) => {
                let project = app.project()?;
                let presence = commands::run::image_exists(&app, &project).await?;
                commands::run::server(&app, &args, &project, presence).await
            }
            Command::Chat(args) => {
                let project = app.project()?;
                let presence = commands::run::image_exists(&app, &project).await?;
                commands::run::chat(&app, &args, &project, presence).await
            }
            Command::Plan(args) => commands::terraform::plan(&app, &args).await,
            Command::Apply(args) => commands::terraform::apply(&app, &args).await,
            Command::Destroy(args) => commands::terraform::destroy(&app, &args).await,
            Command::CreateChatTable(args) => commands::stack::create(&app, &args).await,
            Command::UpdateChatTable(args) => commands::stack::update(&app, &args).await,
            Command::Version => {
                commands::version::run();
                Ok(())
            }
        }
    }
}
