//! Pipeline domain types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::Result;

/// Pipeline definition consumed by the downstream orchestrator
///
/// Field order is the document key order: `pipeline_name`, `schedule`, `tasks`.
/// Task order is execution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub pipeline_name: String,
    pub schedule: String,
    pub tasks: Vec<Task>,
}

impl PipelineConfig {
    /// Serialize to the YAML document format
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Parse a YAML document
    pub fn from_yaml(source: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Task kinds in execution order
    pub fn task_kinds(&self) -> Vec<&'static str> {
        self.tasks.iter().map(Task::kind).collect()
    }
}

/// One step of a pipeline, tagged by `type`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Task {
    ExtractS3 {
        bucket: String,
        prefix: String,
    },
    ExtractSql {
        sql: String,
    },
    ExtractApi {
        endpoint: String,
        headers: BTreeMap<String, String>,
    },
    ExtractFtp {
        host: String,
        port: u16,
        username: String,
        password: String,
        remote_path: String,
        local_path: String,
    },
    SaveExcel {
        output_path: String,
    },
    SaveToS3 {
        output_path: String,
    },
    LoadToS3 {
        input_path: String,
        output_path: String,
    },
    LoadToSnowflake {
        stage: String,
        table: String,
    },
    ArchiveS3 {
        source: String,
        archive: String,
    },
    SendEmail {
        to: String,
        subject: String,
        attachment_path: String,
    },
}

impl Task {
    /// The `type` tag as written to YAML
    pub fn kind(&self) -> &'static str {
        match self {
            Task::ExtractS3 { .. } => "extract_s3",
            Task::ExtractSql { .. } => "extract_sql",
            Task::ExtractApi { .. } => "extract_api",
            Task::ExtractFtp { .. } => "extract_ftp",
            Task::SaveExcel { .. } => "save_excel",
            Task::SaveToS3 { .. } => "save_to_s3",
            Task::LoadToS3 { .. } => "load_to_s3",
            Task::LoadToSnowflake { .. } => "load_to_snowflake",
            Task::ArchiveS3 { .. } => "archive_s3",
            Task::SendEmail { .. } => "send_email",
        }
    }
}
