// ABOUTME: Entry point for the cf-swap CLI application.
// ABOUTME: Parses arguments and dispatches to appropriate command handlers.

mod cli;
mod commands;

use cf_swap::config::{self, Config};
use cf_swap::error::Result;
use cf_swap::output::{Output, OutputMode};
use clap::Parser;
use cli::{Cli, Commands};
use commands::SwapArgs;
use std::env;
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let mode = if cli.json {
        OutputMode::Json
    } else if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };

    if let Err(e) = run(cli.command, mode).await {
        Output::new(mode).error(&e.to_string(), e.platform_output());
        std::process::exit(1);
    }
}

async fn run(command: Commands, mode: OutputMode) -> Result<()> {
    let cwd = env::current_dir()?;
    let output = Output::new(mode);

    match command {
        Commands::Init { force } => {
            config::init_config(&cwd, force)?;
            output.success(&format!("Created {}", config::CONFIG_FILENAME));
            Ok(())
        }
        Commands::Swap {
            app,
            candidate,
            host,
            retired_name,
            skip_health_check,
            destination,
        } => {
            let config = load_config(&cwd, destination.as_deref())?;
            let args = SwapArgs {
                app,
                candidate,
                host,
                retired_name,
                skip_health_check,
            };
            commands::swap(config, args, output).await
        }
        Commands::Inspect { app, destination } => {
            let config = load_config(&cwd, destination.as_deref())?;
            commands::inspect(config, &app, output).await
        }
    }
}

fn load_config(dir: &Path, destination: Option<&str>) -> Result<Config> {
    let config = Config::discover_or_default(dir)?;
    match destination {
        Some(dest) => config.for_destination(dest),
        None => Ok(config),
    }
}
