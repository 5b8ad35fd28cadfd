// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands and their arguments.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cf-swap")]
#[command(about = "Low-downtime application updates for Cloud Foundry")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print the final result
    #[arg(short, long, global = true, conflicts_with = "json")]
    pub quiet: bool,

    /// Emit JSON lines instead of human-readable output
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new cf-swap.yml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Replace a live app with an already-pushed candidate
    Swap {
        /// Name of the live application
        app: String,

        /// Name of the pushed, stopped application that replaces it
        #[arg(short, long)]
        candidate: String,

        /// Host name of the route to create for the candidate
        #[arg(long)]
        host: String,

        /// Name the live app takes afterwards (default: <APP><retired_suffix>)
        #[arg(long)]
        retired_name: Option<String>,

        /// Leave the candidate's health check type untouched
        #[arg(long)]
        skip_health_check: bool,

        /// Target destination (defined in config)
        #[arg(short, long)]
        destination: Option<String>,
    },

    /// Show what a swap of this app would resolve, without changing anything
    Inspect {
        /// Name of the live application
        app: String,

        /// Target destination (defined in config)
        #[arg(short, long)]
        destination: Option<String>,
    },
}
