//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod generate;
mod pipeline;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Interactively generate a pipeline config and its GitHub mapping
    Generate {
        /// Pipeline type (prompted if omitted)
        #[arg(short = 't', long = "type")]
        pipeline_type: Option<String>,

        /// Pipeline name, used as the DAG name and folder prefix (prompted if omitted)
        #[arg(short, long)]
        name: Option<String>,

        /// Pre-filled answers as key=value pairs (e.g. table=RAW.EVENTS)
        #[arg(short, long, value_parser = generate::parse_key_val)]
        answer: Vec<(String, String)>,
    },
    /// List generated pipelines
    List,
    /// Show a generated pipeline config
    Show {
        /// Pipeline name
        name: String,

        /// Print as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// List pipeline types and the questions each one asks
    Types,
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Generate {
            pipeline_type,
            name,
            answer,
        } => generate::handle_generate(config, pipeline_type, name, answer),
        Commands::List => pipeline::list_pipelines(config),
        Commands::Show { name, json } => pipeline::show_pipeline(config, &name, json),
        Commands::Types => pipeline::list_types(),
    }
}
