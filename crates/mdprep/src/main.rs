//! mdprep CLI - documentation source preprocessor.
//!
//! Provides commands for:
//! - `prepare`: Rewrite the source tree and write it to the output directory
//! - `check`: Validate configuration, rewrite rules, and redirects

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, PrepareArgs};
use output::Output;

/// mdprep - documentation source preprocessor.
#[derive(Parser)]
#[command(name = "mdprep", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite the documentation source tree.
    Prepare(PrepareArgs),
    /// Validate the configuration without writing anything.
    Check(CheckArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = match &cli.command {
        Commands::Prepare(args) => args.verbose,
        Commands::Check(args) => args.verbose,
    };

    // Initialize tracing with appropriate log level
    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Prepare(args) => args.execute(),
        Commands::Check(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
