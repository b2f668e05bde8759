//! Pipeline task-list builder
//!
//! Pure mapping from `(pipeline type, pipeline name, answers)` to a
//! [`PipelineConfig`]. Collecting the answers is left to the caller so the
//! mapping can be exercised without any interactive I/O.

use std::collections::BTreeMap;

use crate::domain::pipeline::{PipelineConfig, Task};
use crate::domain::pipeline_type::PipelineType;
use crate::error::{Error, Result};
use crate::templates::{self, AUTO, DEFAULT_SCHEDULE, FTP_PORT};

/// Prompt responses keyed by [`Prompt::key`](crate::Prompt::key), in the order given
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    entries: Vec<(String, String)>,
}

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an answer, replacing any previous value for the same key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Answers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut answers = Answers::new();
        for (key, value) in iter {
            answers.insert(key, value);
        }
        answers
    }
}

/// Build a pipeline config from a pipeline type name
///
/// # Errors
/// - `UnknownPipelineType` if `pipeline_type` is not one of the four known types
/// - `MissingAnswer` if the name or a required answer is blank
pub fn build_pipeline(
    pipeline_type: &str,
    pipeline_name: &str,
    answers: &Answers,
) -> Result<PipelineConfig> {
    let pipeline_type: PipelineType = pipeline_type.parse()?;
    pipeline_type.build(pipeline_name, answers)
}

impl PipelineType {
    /// Build the config for this pipeline type
    pub fn build(self, pipeline_name: &str, answers: &Answers) -> Result<PipelineConfig> {
        let name = pipeline_name.trim();
        if name.is_empty() {
            return Err(Error::MissingAnswer("pipeline_name".to_string()));
        }

        let resolved = Resolved::new(self, answers)?;

        let (schedule, tasks) = match self {
            PipelineType::S3ToSnowflake => (DEFAULT_SCHEDULE.to_string(), s3_to_snowflake(name)),
            PipelineType::SnowflakeToEmail => (
                resolved.answer("schedule")?,
                snowflake_to_email(name, &resolved)?,
            ),
            PipelineType::ApiToSnowflake => (
                resolved.answer("schedule")?,
                api_to_snowflake(name, &resolved)?,
            ),
            PipelineType::FtpToSnowflake => (
                DEFAULT_SCHEDULE.to_string(),
                ftp_to_snowflake(name, &resolved)?,
            ),
        };

        Ok(PipelineConfig {
            pipeline_name: name.to_string(),
            schedule,
            tasks,
        })
    }
}

/// Answers after trimming and defaulting, checked against the prompt table
struct Resolved<'a> {
    values: Vec<(&'static str, &'a str)>,
}

impl<'a> Resolved<'a> {
    fn new(pipeline_type: PipelineType, answers: &'a Answers) -> Result<Self> {
        let mut values = Vec::with_capacity(pipeline_type.prompts().len());

        for prompt in pipeline_type.prompts() {
            let value = answers
                .get(prompt.key)
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .or(prompt.default)
                .ok_or_else(|| Error::MissingAnswer(prompt.key.to_string()))?;
            values.push((prompt.key, value));
        }

        Ok(Self { values })
    }

    fn answer(&self, key: &str) -> Result<String> {
        self.values
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
            .ok_or_else(|| Error::MissingAnswer(key.to_string()))
    }
}

// =============================================================================
// Task tables
// =============================================================================

fn s3_to_snowflake(name: &str) -> Vec<Task> {
    vec![
        Task::ExtractS3 {
            bucket: AUTO.to_string(),
            prefix: format!("{name}/"),
        },
        Task::LoadToSnowflake {
            stage: AUTO.to_string(),
            table: name.to_string(),
        },
        Task::ArchiveS3 {
            source: templates::auto_prefix(name),
            archive: templates::auto_archive(name),
        },
    ]
}

fn snowflake_to_email(name: &str, answers: &Resolved) -> Result<Vec<Task>> {
    let report = templates::report_path(name);

    Ok(vec![
        Task::ExtractSql {
            sql: answers.answer("sql")?,
        },
        Task::SaveExcel {
            output_path: report.clone(),
        },
        Task::SendEmail {
            to: answers.answer("recipient")?,
            subject: format!("Report: {name}"),
            attachment_path: report,
        },
    ])
}

fn api_to_snowflake(name: &str, answers: &Resolved) -> Result<Vec<Task>> {
    let landing = templates::raw_api_path(name);

    Ok(vec![
        Task::ExtractApi {
            endpoint: answers.answer("endpoint")?,
            headers: BTreeMap::from([(
                "Authorization".to_string(),
                answers.answer("authorization")?,
            )]),
        },
        Task::SaveToS3 {
            output_path: landing.clone(),
        },
        Task::LoadToSnowflake {
            stage: AUTO.to_string(),
            table: answers.answer("table")?,
        },
        Task::ArchiveS3 {
            source: landing,
            archive: format!("s3://archive/{name}/"),
        },
    ])
}

fn ftp_to_snowflake(name: &str, answers: &Resolved) -> Result<Vec<Task>> {
    let local = templates::local_csv_path(name);
    let upload = templates::ftp_upload_path(name);

    Ok(vec![
        Task::ExtractFtp {
            host: answers.answer("host")?,
            port: FTP_PORT,
            username: answers.answer("username")?,
            password: answers.answer("password")?,
            remote_path: answers.answer("remote_path")?,
            local_path: local.clone(),
        },
        Task::LoadToS3 {
            input_path: local,
            output_path: upload.clone(),
        },
        Task::LoadToSnowflake {
            stage: AUTO.to_string(),
            table: answers.answer("table")?,
        },
        Task::ArchiveS3 {
            source: upload,
            archive: templates::auto_archive(name),
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_s3_to_snowflake() {
        let answers = Answers::new().with("create_table_sql_path", "sql/orders.sql");
        let config = build_pipeline("s3_to_snowflake", "orders", &answers).unwrap();

        assert_eq!(config.pipeline_name, "orders");
        assert_eq!(config.schedule, "@daily");
        assert_eq!(
            config.tasks,
            vec![
                Task::ExtractS3 {
                    bucket: "{{ auto }}".to_string(),
                    prefix: "orders/".to_string(),
                },
                Task::LoadToSnowflake {
                    stage: "{{ auto }}".to_string(),
                    table: "orders".to_string(),
                },
                Task::ArchiveS3 {
                    source: "s3://{{ auto }}/orders/".to_string(),
                    archive: "s3://{{ auto }}/archive/orders/".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_snowflake_to_email() {
        let answers = Answers::new()
            .with("schedule", "0 8 * * MON")
            .with("sql", "SELECT * FROM sales")
            .with("recipient", "ops@example.com");
        let config = build_pipeline("snowflake_to_email", "weekly_sales", &answers).unwrap();

        assert_eq!(config.schedule, "0 8 * * MON");
        assert_eq!(
            config.tasks,
            vec![
                Task::ExtractSql {
                    sql: "SELECT * FROM sales".to_string(),
                },
                Task::SaveExcel {
                    output_path: "s3://reports/weekly_sales.xlsx".to_string(),
                },
                Task::SendEmail {
                    to: "ops@example.com".to_string(),
                    subject: "Report: weekly_sales".to_string(),
                    attachment_path: "s3://reports/weekly_sales.xlsx".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_snowflake_to_email_default_schedule() {
        let answers = Answers::new()
            .with("schedule", "   ")
            .with("sql", "SELECT 1")
            .with("recipient", "ops@example.com");
        let config = build_pipeline("snowflake_to_email", "daily", &answers).unwrap();
        assert_eq!(config.schedule, "@daily");

        let without = Answers::new()
            .with("sql", "SELECT 1")
            .with("recipient", "ops@example.com");
        let config = build_pipeline("snowflake_to_email", "daily", &without).unwrap();
        assert_eq!(config.schedule, "@daily");
    }

    #[test]
    fn test_api_to_snowflake() {
        let answers = Answers::new()
            .with("schedule", "0 6 * * *")
            .with("endpoint", "https://api.example.com/v1/events")
            .with("authorization", "Bearer token123")
            .with("table", "RAW.EVENTS");
        let config = build_pipeline("api_to_snowflake", "events", &answers).unwrap();

        assert_eq!(config.schedule, "0 6 * * *");
        assert_eq!(
            config.tasks,
            vec![
                Task::ExtractApi {
                    endpoint: "https://api.example.com/v1/events".to_string(),
                    headers: BTreeMap::from([(
                        "Authorization".to_string(),
                        "Bearer token123".to_string(),
                    )]),
                },
                Task::SaveToS3 {
                    output_path: "s3://raw/events/{{ ds_nodash }}.json".to_string(),
                },
                Task::LoadToSnowflake {
                    stage: "{{ auto }}".to_string(),
                    table: "RAW.EVENTS".to_string(),
                },
                Task::ArchiveS3 {
                    source: "s3://raw/events/{{ ds_nodash }}.json".to_string(),
                    archive: "s3://archive/events/".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_ftp_to_snowflake() {
        let answers = Answers::new()
            .with("host", "ftp.vendor.com")
            .with("username", "ingest")
            .with("password", "hunter2")
            .with("remote_path", "/exports/daily.csv")
            .with("table", "VENDOR_DAILY");
        let config = build_pipeline("ftp_to_snowflake", "vendor", &answers).unwrap();

        assert_eq!(config.schedule, "@daily");
        assert_eq!(
            config.tasks,
            vec![
                Task::ExtractFtp {
                    host: "ftp.vendor.com".to_string(),
                    port: 21,
                    username: "ingest".to_string(),
                    password: "hunter2".to_string(),
                    remote_path: "/exports/daily.csv".to_string(),
                    local_path: "/tmp/vendor.csv".to_string(),
                },
                Task::LoadToS3 {
                    input_path: "/tmp/vendor.csv".to_string(),
                    output_path: "s3://{{ auto }}/vendor/{{ ds_nodash }}.csv".to_string(),
                },
                Task::LoadToSnowflake {
                    stage: "{{ auto }}".to_string(),
                    table: "VENDOR_DAILY".to_string(),
                },
                Task::ArchiveS3 {
                    source: "s3://{{ auto }}/vendor/{{ ds_nodash }}.csv".to_string(),
                    archive: "s3://{{ auto }}/archive/vendor/".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_unknown_pipeline_type() {
        let result = build_pipeline("unknown_type", "orders", &Answers::new());
        assert!(matches!(result, Err(Error::UnknownPipelineType(ref t)) if t == "unknown_type"));
    }

    #[test]
    fn test_missing_required_answer() {
        let answers = Answers::new()
            .with("schedule", "0 6 * * *")
            .with("endpoint", "https://api.example.com")
            .with("table", "T");
        let result = build_pipeline("api_to_snowflake", "events", &answers);
        assert!(matches!(result, Err(Error::MissingAnswer(ref k)) if k == "authorization"));
    }

    #[test]
    fn test_blank_pipeline_name() {
        let answers = Answers::new().with("create_table_sql_path", "x.sql");
        let result = build_pipeline("s3_to_snowflake", "  ", &answers);
        assert!(matches!(result, Err(Error::MissingAnswer(ref k)) if k == "pipeline_name"));
    }

    #[test]
    fn test_answers_insert_replaces() {
        let mut answers: Answers = [("host", "a"), ("user", "b")].into_iter().collect();
        answers.insert("host", "c");

        assert_eq!(answers.iter().count(), 2);
        assert_eq!(answers.get("host"), Some("c"));
        assert_eq!(
            answers.iter().map(|(k, _)| k).collect::<Vec<_>>(),
            vec!["host", "user"]
        );
    }
}
