//! Pipeline types and their question tables

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::templates::DEFAULT_SCHEDULE;

/// The four supported pipeline shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineType {
    S3ToSnowflake,
    SnowflakeToEmail,
    ApiToSnowflake,
    FtpToSnowflake,
}

/// How an answer should be collected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Free text, used as-is
    Text,
    /// Path to a SQL script that must be readable at generation time
    SqlFile,
}

/// A type-specific question asked by the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prompt {
    /// Answer key used by the builder
    pub key: &'static str,
    /// Question shown to the operator
    pub question: &'static str,
    /// Value used when the answer is left blank; `None` means required
    pub default: Option<&'static str>,
    pub kind: PromptKind,
}

impl Prompt {
    const fn text(key: &'static str, question: &'static str) -> Self {
        Self {
            key,
            question,
            default: None,
            kind: PromptKind::Text,
        }
    }

    pub fn is_optional(&self) -> bool {
        self.default.is_some()
    }
}

const S3_TO_SNOWFLAKE_PROMPTS: &[Prompt] = &[Prompt {
    key: "create_table_sql_path",
    question: "Path to CREATE TABLE SQL file",
    default: None,
    kind: PromptKind::SqlFile,
}];

const SNOWFLAKE_TO_EMAIL_PROMPTS: &[Prompt] = &[
    Prompt {
        key: "schedule",
        question: "Enter report schedule (cron or text)",
        default: Some(DEFAULT_SCHEDULE),
        kind: PromptKind::Text,
    },
    Prompt::text("sql", "Enter SELECT SQL for report"),
    Prompt::text("recipient", "Enter recipient email"),
];

const API_TO_SNOWFLAKE_PROMPTS: &[Prompt] = &[
    Prompt::text("schedule", "Enter API schedule (e.g. cron: 0 6 * * *)"),
    Prompt::text("endpoint", "API URL"),
    Prompt::text("authorization", "Authorization token"),
    Prompt::text("table", "Target Snowflake table"),
];

const FTP_TO_SNOWFLAKE_PROMPTS: &[Prompt] = &[
    Prompt::text("host", "FTP host"),
    Prompt::text("username", "FTP username"),
    Prompt::text("password", "FTP password"),
    Prompt::text("remote_path", "Remote file path"),
    Prompt::text("table", "Target Snowflake table"),
];

impl PipelineType {
    pub const ALL: [PipelineType; 4] = [
        PipelineType::S3ToSnowflake,
        PipelineType::SnowflakeToEmail,
        PipelineType::ApiToSnowflake,
        PipelineType::FtpToSnowflake,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PipelineType::S3ToSnowflake => "s3_to_snowflake",
            PipelineType::SnowflakeToEmail => "snowflake_to_email",
            PipelineType::ApiToSnowflake => "api_to_snowflake",
            PipelineType::FtpToSnowflake => "ftp_to_snowflake",
        }
    }

    /// Type-specific questions, in the order they are asked
    pub fn prompts(self) -> &'static [Prompt] {
        match self {
            PipelineType::S3ToSnowflake => S3_TO_SNOWFLAKE_PROMPTS,
            PipelineType::SnowflakeToEmail => SNOWFLAKE_TO_EMAIL_PROMPTS,
            PipelineType::ApiToSnowflake => API_TO_SNOWFLAKE_PROMPTS,
            PipelineType::FtpToSnowflake => FTP_TO_SNOWFLAKE_PROMPTS,
        }
    }
}

impl fmt::Display for PipelineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PipelineType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        PipelineType::ALL
            .into_iter()
            .find(|t| t.as_str() == trimmed)
            .ok_or_else(|| Error::UnknownPipelineType(trimmed.to_string()))
    }
}
