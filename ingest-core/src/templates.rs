//! Placeholder tokens and derived locations
//!
//! Tokens are emitted verbatim for the downstream orchestrator to resolve.

/// Resolved by the orchestrator to the bucket/stage for the pipeline
pub const AUTO: &str = "{{ auto }}";

/// Resolved by the orchestrator to the run date as `YYYYMMDD`
pub const DS_NODASH: &str = "{{ ds_nodash }}";

/// Schedule used when a pipeline type does not ask for one
pub const DEFAULT_SCHEDULE: &str = "@daily";

/// Fixed FTP control port
pub const FTP_PORT: u16 = 21;

/// Directory (relative to the output root) holding pipeline configs
pub const DAG_CONFIG_DIR: &str = "dag_configs";

/// Directory (relative to the output root) holding GitHub mappings
pub const GITHUB_MAPPING_DIR: &str = "github_mappings";

pub fn auto_prefix(name: &str) -> String {
    format!("s3://{AUTO}/{name}/")
}

pub fn auto_archive(name: &str) -> String {
    format!("s3://{AUTO}/archive/{name}/")
}

/// Date-partitioned raw landing path for API extracts
pub fn raw_api_path(name: &str) -> String {
    format!("s3://raw/{name}/{DS_NODASH}.json")
}

/// Date-partitioned upload path for FTP extracts
pub fn ftp_upload_path(name: &str) -> String {
    format!("s3://{AUTO}/{name}/{DS_NODASH}.csv")
}

pub fn report_path(name: &str) -> String {
    format!("s3://reports/{name}.xlsx")
}

pub fn local_csv_path(name: &str) -> String {
    format!("/tmp/{name}.csv")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_literal() {
        assert_eq!(auto_prefix("orders"), "s3://{{ auto }}/orders/");
        assert_eq!(
            ftp_upload_path("orders"),
            "s3://{{ auto }}/orders/{{ ds_nodash }}.csv"
        );
        assert_eq!(raw_api_path("events"), "s3://raw/events/{{ ds_nodash }}.json");
    }
}
