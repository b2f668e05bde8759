//! Generate command handler
//!
//! Collects answers for a pipeline type, builds the config and writes the
//! config and mapping files. Answers passed on the command line are not
//! asked again.

use anyhow::{Context, Result, bail};
use colored::*;
use ingest_core::{
    Answers, PipelineConfig, PipelineType, PromptKind, WrittenFiles, write_pipeline_files,
};
use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::prompt::{LinePrompter, Prompter};

const TYPE_QUESTION: &str = "Enter pipeline type (s3_to_snowflake, snowflake_to_email, api_to_snowflake, ftp_to_snowflake)";
const NAME_QUESTION: &str = "Enter pipeline name (used as DAG name and folder prefix)";

/// Parse a single key=value pair
pub fn parse_key_val(s: &str) -> Result<(String, String)> {
    let pos = s
        .find('=')
        .ok_or_else(|| anyhow::anyhow!("invalid KEY=value: no `=` found in `{}`", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// Handle the generate command against stdin/stdout
pub fn handle_generate(
    config: &Config,
    pipeline_type: Option<String>,
    name: Option<String>,
    answers: Vec<(String, String)>,
) -> Result<()> {
    let mut prompter = LinePrompter::stdio();
    let (pipeline, written) = generate(
        &mut prompter,
        &config.root,
        pipeline_type,
        name,
        answers.into_iter().collect(),
    )?;

    println!(
        "{} {}",
        "✓ DAG config written to:".green().bold(),
        written.dag_config.display().to_string().cyan()
    );
    println!(
        "{} {}",
        "✓ GitHub mapping written to:".green().bold(),
        written.github_mapping.display().to_string().cyan()
    );
    println!(
        "  Tasks: {}",
        pipeline.task_kinds().join(" → ").dimmed()
    );

    Ok(())
}

/// Ask for whatever is missing, then build and write the pipeline files
///
/// Nothing is written unless the pipeline type is known and every required
/// answer is present.
pub fn generate<P: Prompter>(
    prompter: &mut P,
    root: &Path,
    pipeline_type: Option<String>,
    name: Option<String>,
    mut answers: Answers,
) -> Result<(PipelineConfig, WrittenFiles)> {
    let pipeline_type: PipelineType = match pipeline_type {
        Some(t) => t,
        None => prompter.ask(TYPE_QUESTION, None)?,
    }
    .parse()?;

    check_answer_keys(pipeline_type, &answers)?;

    let name = match name {
        Some(n) => n,
        None => prompter.ask(NAME_QUESTION, None)?,
    };

    for prompt in pipeline_type.prompts() {
        if !answers.contains(prompt.key) {
            let answer = prompter.ask(prompt.question, prompt.default)?;
            answers.insert(prompt.key, answer);
        }

        if prompt.kind == PromptKind::SqlFile {
            let path = answers.get(prompt.key).unwrap_or_default().trim();
            if !path.is_empty() {
                fs::read_to_string(path)
                    .with_context(|| format!("Failed to read SQL file: {}", path))?;
            }
        }
    }

    let pipeline = pipeline_type.build(&name, &answers)?;
    let written = write_pipeline_files(root, &pipeline)?;

    Ok((pipeline, written))
}

fn check_answer_keys(pipeline_type: PipelineType, answers: &Answers) -> Result<()> {
    let known: Vec<&str> = pipeline_type.prompts().iter().map(|p| p.key).collect();

    for (key, _) in answers.iter() {
        if !known.contains(&key) {
            bail!(
                "Unknown answer '{}' for {} (expected one of: {})",
                key,
                pipeline_type,
                known.join(", ")
            );
        }
    }

    Ok(())
}
