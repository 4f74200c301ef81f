//! astwalk CLI
//!
//! Walks JSON ASTs with schema-driven visitor keys and reports what the
//! traversal saw.

mod cli;
mod commands;
mod error;
mod input;
mod output;

use std::process::ExitCode;

use clap::Parser;
use miette::Result;
use tracing::error;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::{run_keys, run_stats, run_trace};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Trace {
            file,
            events,
            format,
        } => run_trace(cli, file, events, *format),
        Commands::Stats { file, format } => run_stats(cli, file, *format),
        Commands::Keys { node_type } => run_keys(cli, node_type.as_deref()),
    }
}
