//! Ingest Core
//!
//! Core types and generation logic for the ingest pipeline tooling.
//!
//! This crate contains:
//! - Domain types: Pipeline configs, tasks, GitHub mappings and pipeline types
//! - Builder: The pure mapping from pipeline type and answers to a pipeline config
//! - Output: Writing generated documents to disk
//! - Catalog: Discovering previously generated pipeline configs

pub mod builder;
pub mod catalog;
pub mod domain;
pub mod error;
pub mod output;
pub mod templates;

pub use builder::{Answers, build_pipeline};
pub use catalog::{list_pipelines, load_pipeline};
pub use domain::mapping::{GithubMapping, MappingEntry};
pub use domain::pipeline::{PipelineConfig, Task};
pub use domain::pipeline_type::{PipelineType, Prompt, PromptKind};
pub use error::{Error, Result};
pub use output::{WrittenFiles, write_pipeline_files};
