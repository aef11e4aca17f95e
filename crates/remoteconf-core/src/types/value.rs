//! Resolved config values with provenance tracking

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Raw strings treated as `true` by [`ConfigValue::as_bool`], matching the
/// truthy set the Firebase web SDK documents.
static TRUTHY: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["1", "true", "t", "yes", "y", "on"].into_iter().collect());

/// Where a resolved value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueSource {
    /// Synthetic empty fallback for keys present in no layer
    Static,
    /// Application-supplied default
    Default,
    /// Activated remote snapshot
    Remote,
}

impl ValueSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueSource::Static => "static",
            ValueSource::Default => "default",
            ValueSource::Remote => "remote",
        }
    }
}

impl std::fmt::Display for ValueSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One resolved value plus its provenance
///
/// Values are stored in canonical string form. The typed accessors derive
/// from that string and are total: unparseable input degrades to `0` or
/// `false` instead of erroring.
///
/// Instances are immutable; a fresh lookup produces a fresh instance
/// reflecting the store state at that moment.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigValue {
    raw: String,
    source: ValueSource,
}

impl ConfigValue {
    pub fn new(raw: impl Into<String>, source: ValueSource) -> Self {
        Self {
            raw: raw.into(),
            source,
        }
    }

    /// The synthetic value returned for keys present in no layer
    pub fn static_default() -> Self {
        Self::new("", ValueSource::Static)
    }

    /// Canonical raw string form (empty for static values)
    pub fn as_string(&self) -> &str {
        &self.raw
    }

    /// Parse the raw string as a numeric literal; `0.0` when it cannot be
    /// evaluated as a number
    pub fn as_number(&self) -> f64 {
        self.raw.trim().parse().unwrap_or(0.0)
    }

    /// Case-insensitive membership test against the truthy set
    /// `{"1", "true", "t", "yes", "y", "on"}`
    pub fn as_bool(&self) -> bool {
        TRUTHY.contains(self.raw.to_lowercase().as_str())
    }

    /// Provenance of this value
    pub fn source(&self) -> ValueSource {
        self.source
    }
}
