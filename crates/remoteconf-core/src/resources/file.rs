//! File-based resource loader (JSON)
//!
//! Resources live as `<dir>/<name>.json`, each a flat JSON object of
//! string/number/boolean values.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::traits::ResourceLoader;
use crate::error::{ConfigError, ConfigResult};
use crate::types::DefaultValue;

/// File-based resource loader
///
/// # Example
///
/// ```no_run
/// use remoteconf_core::resources::FileResourceLoader;
///
/// // Resources under the platform config dir
/// let loader = FileResourceLoader::user();
///
/// // Resources bundled next to the app
/// let bundled = FileResourceLoader::new("./resources");
/// ```
#[derive(Debug)]
pub struct FileResourceLoader {
    dir: PathBuf,
}

impl FileResourceLoader {
    /// Load resources from a specific directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Load resources from the platform config dir
    /// (`~/.config/remoteconf/resources` on Linux)
    pub fn user() -> Self {
        let config_dir = dirs::config_dir().unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config")
        });
        Self::new(config_dir.join("remoteconf").join("resources"))
    }

    /// The directory resources are read from
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn resource_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }
}

impl ResourceLoader for FileResourceLoader {
    fn name(&self) -> &str {
        "file"
    }

    fn load(&self, name: &str) -> ConfigResult<HashMap<String, DefaultValue>> {
        let path = self.resource_path(name);
        if !path.exists() {
            return Err(ConfigError::ResourceNotFound {
                name: name.to_string(),
            });
        }

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::Resource {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| ConfigError::Resource {
            name: name.to_string(),
            reason: format!("failed to parse JSON: {e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_loads_json_resource() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("remote_config_resource_test.json"),
            r#"{"company":"invertase","count":1337,"flag":true}"#,
        )
        .unwrap();

        let loader = FileResourceLoader::new(dir.path());
        let bundle = loader.load("remote_config_resource_test").unwrap();

        assert_eq!(bundle["company"].canonical_string(), "invertase");
        assert_eq!(bundle["count"].canonical_string(), "1337");
        assert_eq!(bundle["flag"].canonical_string(), "true");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let loader = FileResourceLoader::new(dir.path());

        let err = loader.load("i_do_not_exist").unwrap_err();
        assert_eq!(err.code(), "resource_not_found");
        assert!(err.to_string().contains("was not found"));
    }

    #[test]
    fn test_malformed_content_is_a_parse_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("broken.json"), "not json at all").unwrap();

        let loader = FileResourceLoader::new(dir.path());
        let err = loader.load("broken").unwrap_err();
        assert_eq!(err.code(), "resource_parse");
    }

    #[test]
    fn test_nested_values_are_rejected() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("nested.json"), r#"{"obj":{"a":1}}"#).unwrap();

        let loader = FileResourceLoader::new(dir.path());
        assert_eq!(loader.load("nested").unwrap_err().code(), "resource_parse");
    }
}
