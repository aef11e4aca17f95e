//! Mutable fetch settings consumed by the controller

/// Production default throttle window (12 hours)
pub const DEFAULT_MINIMUM_FETCH_INTERVAL_MILLIS: u64 = 43_200_000;

/// Production default transport timeout (60 seconds)
pub const DEFAULT_FETCH_TIMEOUT_MILLIS: u64 = 60_000;

/// Fetch settings for one remote config instance
///
/// Settings are read at fetch time only; changing them never retroactively
/// affects an already-completed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigSettings {
    /// Minimum elapsed time between two fetch attempts
    pub minimum_fetch_interval_millis: u64,
    /// Transport timeout, opaque to this core (the transport enforces it)
    pub fetch_timeout_millis: u64,
}

impl Default for ConfigSettings {
    fn default() -> Self {
        Self {
            minimum_fetch_interval_millis: DEFAULT_MINIMUM_FETCH_INTERVAL_MILLIS,
            fetch_timeout_millis: DEFAULT_FETCH_TIMEOUT_MILLIS,
        }
    }
}

impl ConfigSettings {
    /// Apply a partial update; unset fields retain their prior value
    pub fn apply(&mut self, update: ConfigSettingsUpdate) {
        if let Some(v) = update.minimum_fetch_interval_millis {
            self.minimum_fetch_interval_millis = v;
        }
        if let Some(v) = update.fetch_timeout_millis {
            self.fetch_timeout_millis = v;
        }
    }
}

/// Partial settings update with enumerated recognized fields
///
/// The upstream binding accepts a dynamically-typed property bag here; this
/// core requires the explicit struct so unrecognized options cannot slip
/// through silently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigSettingsUpdate {
    pub minimum_fetch_interval_millis: Option<u64>,
    pub fetch_timeout_millis: Option<u64>,
}

impl ConfigSettingsUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn minimum_fetch_interval_millis(mut self, millis: u64) -> Self {
        self.minimum_fetch_interval_millis = Some(millis);
        self
    }

    pub fn fetch_timeout_millis(mut self, millis: u64) -> Self {
        self.fetch_timeout_millis = Some(millis);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_production_values() {
        let settings = ConfigSettings::default();
        assert_eq!(settings.minimum_fetch_interval_millis, 43_200_000);
        assert_eq!(settings.fetch_timeout_millis, 60_000);
    }

    #[test]
    fn test_apply_sets_only_provided_fields() {
        let mut settings = ConfigSettings::default();
        settings.apply(ConfigSettingsUpdate::new().minimum_fetch_interval_millis(3000));

        assert_eq!(settings.minimum_fetch_interval_millis, 3000);
        assert_eq!(settings.fetch_timeout_millis, DEFAULT_FETCH_TIMEOUT_MILLIS);

        settings.apply(ConfigSettingsUpdate::new().fetch_timeout_millis(3000));
        assert_eq!(settings.minimum_fetch_interval_millis, 3000);
        assert_eq!(settings.fetch_timeout_millis, 3000);
    }

    #[test]
    fn test_empty_update_is_a_no_op() {
        let mut settings = ConfigSettings::default();
        settings.apply(ConfigSettingsUpdate::new());
        assert_eq!(settings, ConfigSettings::default());
    }
}
