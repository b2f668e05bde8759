//! Ingest CLI
//!
//! Command-line tool for generating ETL pipeline configs and inspecting the
//! configs that have already been generated.

mod commands;
mod config;
mod prompt;

use clap::Parser;
use colored::*;
use commands::{Commands, handle_command};
use config::Config;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ingest")]
#[command(about = "Ingest pipeline config generator", long_about = None)]
struct Cli {
    /// Root directory holding dag_configs/ and github_mappings/
    #[arg(long, env = "INGEST_ROOT", default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    let config = Config { root: cli.root };

    if let Err(e) = handle_command(cli.command, &config) {
        eprintln!("{} {:#}", "✗".red().bold(), e);
        std::process::exit(1);
    }
}
