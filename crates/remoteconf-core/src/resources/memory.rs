//! In-memory resource loader

use std::collections::HashMap;

use parking_lot::RwLock;

use super::traits::ResourceLoader;
use crate::error::{ConfigError, ConfigResult};
use crate::types::DefaultValue;

/// In-memory resource loader for testing
#[derive(Debug, Default)]
pub struct MemoryResourceLoader {
    bundles: RwLock<HashMap<String, HashMap<String, DefaultValue>>>,
}

impl MemoryResourceLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named bundle, replacing any previous one
    pub fn insert(&self, name: impl Into<String>, bundle: HashMap<String, DefaultValue>) {
        self.bundles.write().insert(name.into(), bundle);
    }

    /// Drop a named bundle
    pub fn remove(&self, name: &str) -> bool {
        self.bundles.write().remove(name).is_some()
    }
}

impl ResourceLoader for MemoryResourceLoader {
    fn name(&self) -> &str {
        "memory"
    }

    fn load(&self, name: &str) -> ConfigResult<HashMap<String, DefaultValue>> {
        self.bundles
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::ResourceNotFound {
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_registered_bundle() {
        let loader = MemoryResourceLoader::new();
        let mut bundle = HashMap::new();
        bundle.insert("company".to_string(), DefaultValue::from("invertase"));
        loader.insert("remote_config_resource_test", bundle);

        let loaded = loader.load("remote_config_resource_test").unwrap();
        assert_eq!(loaded["company"].canonical_string(), "invertase");
    }

    #[test]
    fn test_missing_bundle_not_found() {
        let loader = MemoryResourceLoader::new();
        let err = loader.load("i_do_not_exist").unwrap_err();
        assert_eq!(err.code(), "resource_not_found");
        assert!(err.to_string().contains("was not found"));
    }

    #[test]
    fn test_remove_bundle() {
        let loader = MemoryResourceLoader::new();
        loader.insert("a", HashMap::new());
        assert!(loader.remove("a"));
        assert!(!loader.remove("a"));
        assert!(loader.load("a").is_err());
    }
}
