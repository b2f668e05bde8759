//! Writing generated documents to disk
//!
//! Both documents are written with plain overwrites. The pipeline config is
//! written first and the mapping second; the pair is not written atomically,
//! so an interruption between the two leaves only the config on disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::mapping::GithubMapping;
use crate::domain::pipeline::PipelineConfig;
use crate::error::{Error, Result};
use crate::templates::{DAG_CONFIG_DIR, GITHUB_MAPPING_DIR};

/// Paths of the documents produced for one pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFiles {
    pub dag_config: PathBuf,
    pub github_mapping: PathBuf,
}

/// Path of a pipeline config under an output root
pub fn dag_config_path(root: &Path, pipeline_name: &str) -> PathBuf {
    root.join(DAG_CONFIG_DIR).join(format!("{pipeline_name}.yaml"))
}

/// Path of a GitHub mapping under an output root
pub fn github_mapping_path(root: &Path, pipeline_name: &str) -> PathBuf {
    root.join(GITHUB_MAPPING_DIR).join(format!("{pipeline_name}.yaml"))
}

/// Write the pipeline config and its GitHub mapping under `root`
///
/// Existing files for the same pipeline name are overwritten.
pub fn write_pipeline_files(root: &Path, config: &PipelineConfig) -> Result<WrittenFiles> {
    // Serialize both up front so a YAML error leaves nothing behind
    let config_yaml = config.to_yaml()?;
    let mapping_yaml = GithubMapping::for_pipeline(&config.pipeline_name).to_yaml()?;

    let dag_config = dag_config_path(root, &config.pipeline_name);
    write_document(&dag_config, &config_yaml)?;

    let github_mapping = github_mapping_path(root, &config.pipeline_name);
    write_document(&github_mapping, &mapping_yaml)?;

    Ok(WrittenFiles {
        dag_config,
        github_mapping,
    })
}

fn write_document(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io("create directory", parent, e))?;
    }
    fs::write(path, contents).map_err(|e| Error::io("write", path, e))
}
