//! GitHub mapping document
//!
//! Links the CSV file expected for a pipeline to its object-store location
//! and to the location of the pipeline config. Consumed by the deployment
//! workflow.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::templates::AUTO;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubMapping {
    pub mappings: Vec<MappingEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    pub file_name: String,
    pub s3_location: String,
    pub dag_config: String,
}

impl GithubMapping {
    /// Build the single-entry mapping for a pipeline
    pub fn for_pipeline(pipeline_name: &str) -> Self {
        Self {
            mappings: vec![MappingEntry {
                file_name: format!("{pipeline_name}.csv"),
                s3_location: format!("s3://{AUTO}/{pipeline_name}/{pipeline_name}.csv"),
                dag_config: format!("s3://dag-configs/{pipeline_name}.yaml"),
            }],
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
