//! Layered in-memory config store
//!
//! Two precedence layers hold raw string values: application defaults and
//! the activated remote snapshot. Lookup resolves activated over default;
//! keys present in neither layer resolve to the synthetic static value.
//! All mutation goes through a single write lock so readers always observe
//! a consistent snapshot.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::error::{ConfigError, ConfigResult};
use crate::types::{ConfigValue, DefaultValue, ValueSource};

/// Outcome of a reset request
///
/// Whether reset is available at all is a host-platform capability (the
/// Android SDK clears everything, the iOS SDK has no such API), so it is an
/// explicit flag on the store instead of conditionals in callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    /// Both layers were cleared
    Cleared,
    /// The host platform does not support resetting config state
    Unsupported,
}

#[derive(Debug, Default)]
struct Layers {
    defaults: HashMap<String, String>,
    activated: HashMap<String, String>,
}

/// Two-layer key/value store with activated-over-default precedence
#[derive(Debug)]
pub struct ConfigStore {
    layers: RwLock<Layers>,
    supports_reset: bool,
}

impl ConfigStore {
    pub fn new(supports_reset: bool) -> Self {
        Self {
            layers: RwLock::new(Layers::default()),
            supports_reset,
        }
    }

    /// Replace the defaults layer with canonicalized values
    ///
    /// The activated layer is untouched.
    pub fn set_defaults(&self, defaults: HashMap<String, DefaultValue>) {
        let canonical: HashMap<String, String> = defaults
            .into_iter()
            .map(|(key, value)| (key, value.canonical_string()))
            .collect();
        self.layers.write().defaults = canonical;
    }

    /// Resolve one key
    ///
    /// Keys are case-sensitive and must be non-empty; an empty key is the
    /// typed rendering of a missing or non-string key and fails with
    /// [`ConfigError::InvalidArgument`].
    pub fn get_value(&self, key: &str) -> ConfigResult<ConfigValue> {
        if key.is_empty() {
            return Err(ConfigError::invalid_key());
        }

        let layers = self.layers.read();
        if let Some(raw) = layers.activated.get(key) {
            Ok(ConfigValue::new(raw.clone(), ValueSource::Remote))
        } else if let Some(raw) = layers.defaults.get(key) {
            Ok(ConfigValue::new(raw.clone(), ValueSource::Default))
        } else {
            Ok(ConfigValue::static_default())
        }
    }

    /// Every key present in either layer, resolved with activated winning
    /// per key
    pub fn get_all(&self) -> HashMap<String, ConfigValue> {
        let layers = self.layers.read();
        let mut resolved: HashMap<String, ConfigValue> = layers
            .defaults
            .iter()
            .map(|(k, raw)| (k.clone(), ConfigValue::new(raw.clone(), ValueSource::Default)))
            .collect();
        for (k, raw) in &layers.activated {
            resolved.insert(k.clone(), ConfigValue::new(raw.clone(), ValueSource::Remote));
        }
        resolved
    }

    /// Plain key/value view of the defaults layer
    pub fn default_config(&self) -> HashMap<String, String> {
        self.layers.read().defaults.clone()
    }

    /// Clear both layers, if the host platform allows it
    pub fn reset(&self) -> ResetOutcome {
        if !self.supports_reset {
            return ResetOutcome::Unsupported;
        }
        let mut layers = self.layers.write();
        layers.defaults.clear();
        layers.activated.clear();
        ResetOutcome::Cleared
    }

    /// Replace the activated layer with a staged snapshot
    ///
    /// Returns whether the content actually changed; promoting an identical
    /// snapshot is a no-op.
    pub(crate) fn activate_snapshot(&self, snapshot: HashMap<String, String>) -> bool {
        let mut layers = self.layers.write();
        if layers.activated == snapshot {
            return false;
        }
        layers.activated = snapshot;
        true
    }
}
