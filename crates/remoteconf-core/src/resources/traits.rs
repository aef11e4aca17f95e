//! Resource loader trait

use std::collections::HashMap;

use crate::error::ConfigResult;
use crate::types::DefaultValue;

/// Loader for named default-value resources
///
/// Implementations:
/// - `MemoryResourceLoader`: in-memory bundles for testing
/// - `FileResourceLoader`: JSON files on disk
/// - Host adapters: platform asset catalogs
pub trait ResourceLoader: Send + Sync {
    /// Human-readable name of this loader
    fn name(&self) -> &str;

    /// Load the named resource as a key/value mapping
    ///
    /// Fails with [`crate::ConfigError::ResourceNotFound`] when no resource
    /// of that name exists.
    fn load(&self, name: &str) -> ConfigResult<HashMap<String, DefaultValue>>;
}
