//! Pipeline command handlers
//!
//! Read-only commands over the generated configs and the pipeline types.

use anyhow::{Context, Result};
use colored::*;
use ingest_core::{PipelineType, Task};

use crate::config::Config;

/// List generated pipelines, numbered the same way the upload service numbers them
pub fn list_pipelines(config: &Config) -> Result<()> {
    let dir = config.config_dir();
    let pipelines = ingest_core::list_pipelines(&dir)?;

    if pipelines.is_empty() {
        println!(
            "{}",
            format!("No pipelines found in {}", dir.display()).yellow()
        );
        return Ok(());
    }

    println!("{}", "Pipelines:".bold());
    for (i, name) in pipelines.iter().enumerate() {
        println!("  {}. {}", i + 1, name.cyan());
    }

    Ok(())
}

/// Show one generated pipeline
pub fn show_pipeline(config: &Config, name: &str, json: bool) -> Result<()> {
    let pipeline = ingest_core::load_pipeline(&config.config_dir(), name)
        .with_context(|| format!("Failed to load pipeline '{}'", name))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&pipeline)?);
        return Ok(());
    }

    println!("{}", "Pipeline Details".bold().underline());
    println!("  Name:     {}", pipeline.pipeline_name.bold());
    println!("  Schedule: {}", pipeline.schedule.cyan());
    println!("  Tasks:");
    for (i, task) in pipeline.tasks.iter().enumerate() {
        println!(
            "    {}. {} {}",
            i + 1,
            task.kind().green(),
            describe(task).dimmed()
        );
    }

    Ok(())
}

/// One-line summary of a task's main attributes
fn describe(task: &Task) -> String {
    match task {
        Task::ExtractS3 { bucket, prefix } => format!("{bucket}/{prefix}"),
        Task::ExtractSql { sql } => sql.lines().next().unwrap_or_default().to_string(),
        Task::ExtractApi { endpoint, .. } => endpoint.clone(),
        Task::ExtractFtp {
            host,
            port,
            remote_path,
            ..
        } => format!("{host}:{port}{remote_path}"),
        Task::SaveExcel { output_path } | Task::SaveToS3 { output_path } => {
            format!("→ {output_path}")
        }
        Task::LoadToS3 {
            input_path,
            output_path,
        } => format!("{input_path} → {output_path}"),
        Task::LoadToSnowflake { stage, table } => format!("{stage} → {table}"),
        Task::ArchiveS3 { source, archive } => format!("{source} → {archive}"),
        Task::SendEmail { to, subject, .. } => format!("to {to}: {subject}"),
    }
}

/// List pipeline types with the questions `generate` will ask
pub fn list_types() -> Result<()> {
    for pipeline_type in PipelineType::ALL {
        println!("{}", pipeline_type.as_str().bold());
        for prompt in pipeline_type.prompts() {
            let default = prompt
                .default
                .map(|d| format!(" (default: {})", d))
                .unwrap_or_default();
            println!(
                "  {} {}{}",
                prompt.key.cyan(),
                prompt.question,
                default.dimmed()
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_tasks() {
        let task = Task::LoadToSnowflake {
            stage: "{{ auto }}".to_string(),
            table: "ORDERS".to_string(),
        };
        assert_eq!(describe(&task), "{{ auto }} → ORDERS");

        let task = Task::ExtractSql {
            sql: "SELECT *\nFROM sales".to_string(),
        };
        assert_eq!(describe(&task), "SELECT *");
    }
}
