//! cominty - build, run, publish and deploy the cominty service

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cominty_cli::cli::Cli;
use cominty_cli::output::OutputContext;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let output = OutputContext::new(cli.no_color, cli.quiet);
    if let Err(e) = cli.run().await {
        output.error(&format!("Error: {e:#}"));
        std::process::exit(1);
    }
}
