//! Pipeline catalog
//!
//! Discovers previously generated pipeline configs by scanning a directory.
//! Only file names are used for listing; contents are parsed on demand.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::domain::pipeline::PipelineConfig;
use crate::error::{Error, Result};

const CONFIG_EXTENSION: &str = "yaml";

/// List pipeline names found in `dir`, sorted lexicographically
///
/// A pipeline name is the stem of a `*.yaml` file directly inside `dir`.
/// A missing directory is treated as an empty catalog.
pub fn list_pipelines(dir: &Path) -> Result<Vec<String>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(Error::io("read directory", dir, e)),
    };

    let mut names = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| Error::io("read directory", dir, e))?.path();

        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(CONFIG_EXTENSION)
        {
            continue;
        }

        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            names.push(stem.to_string());
        }
    }

    names.sort();
    Ok(names)
}

/// Load a single pipeline config by name
pub fn load_pipeline(dir: &Path, pipeline_name: &str) -> Result<PipelineConfig> {
    let path = dir.join(format!("{pipeline_name}.{CONFIG_EXTENSION}"));
    let contents = fs::read_to_string(&path).map_err(|e| Error::io("read", &path, e))?;
    PipelineConfig::from_yaml(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_lists_yaml_stems_sorted() {
        let dir = TempDir::new().unwrap();
        for name in ["gamma.yaml", "alpha.yaml", "beta.yaml", "notes.txt"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        fs::create_dir(dir.path().join("nested.yaml")).unwrap();

        let names = list_pipelines(dir.path()).unwrap();
        assert_eq!(names, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        let names = list_pipelines(&dir.path().join("does_not_exist")).unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn test_load_pipeline() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("alpha.yaml"),
            "pipeline_name: alpha\nschedule: '@daily'\ntasks: []\n",
        )
        .unwrap();

        let config = load_pipeline(dir.path(), "alpha").unwrap();
        assert_eq!(config.pipeline_name, "alpha");
        assert!(config.tasks.is_empty());

        let missing = load_pipeline(dir.path(), "beta").unwrap_err();
        assert!(matches!(missing, Error::DependencyFailure { .. }));
    }
}
