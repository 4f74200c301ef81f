//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// astwalk - Schema-driven AST traversal
#[derive(Parser)]
#[command(name = "astwalk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Visitor keys file (JSON), merged over the bundled Babel keys
    #[arg(short, long, global = true, value_name = "FILE")]
    pub keys: Option<PathBuf>,

    /// Do not load the bundled Babel visitor keys
    #[arg(long, global = true)]
    pub no_default_keys: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every enter/exit event of a traversal
    Trace {
        /// AST file (JSON)
        file: PathBuf,

        /// Events to report (enter, exit, both)
        #[arg(short, long, default_value = "both")]
        events: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Count visited nodes per type
    Stats {
        /// AST file (JSON)
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show the effective visitor keys
    Keys {
        /// Only show this node type
        node_type: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
