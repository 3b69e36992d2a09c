use std::path::PathBuf;

use clap::Parser;

use crate::Commands;

/// Main CLI application arguments and command structure
#[derive(Parser)]
#[clap(version, about = "Local-first markdown document vault")]
pub struct Cli {
    /// Path to the data directory holding the document collection
    #[clap(long, value_parser)]
    pub data_dir: Option<PathBuf>,

    /// Verbose output mode
    #[clap(short, long)]
    pub verbose: bool,

    /// Subcommands for the mdvault application
    #[clap(subcommand)]
    pub command: Commands,
}
