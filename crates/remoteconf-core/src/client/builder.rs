//! Builder for remote config instances

use std::sync::Arc;

use super::RemoteConfig;
use crate::error::{ConfigError, ConfigResult};
use crate::logging::{Logger, NoOpLogger};
use crate::resources::{FileResourceLoader, ResourceLoader};
use crate::store::ConfigStore;
use crate::transport::ConfigTransport;
use crate::types::ConfigSettings;

/// Builder for [`RemoteConfig`]
///
/// A transport is required; everything else has defaults: a
/// [`FileResourceLoader::user`] resource loader, a silent logger, reset
/// support on, and production fetch settings.
pub struct RemoteConfigBuilder {
    transport: Option<Arc<dyn ConfigTransport>>,
    resources: Option<Arc<dyn ResourceLoader>>,
    logger: Option<Arc<dyn Logger>>,
    settings: ConfigSettings,
    supports_reset: bool,
}

impl Default for RemoteConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoteConfigBuilder {
    pub fn new() -> Self {
        Self {
            transport: None,
            resources: None,
            logger: None,
            settings: ConfigSettings::default(),
            supports_reset: true,
        }
    }

    /// The transport performing the actual remote fetch (required)
    pub fn transport(mut self, transport: Arc<dyn ConfigTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Where named default resources are loaded from
    pub fn resource_loader(mut self, resources: Arc<dyn ResourceLoader>) -> Self {
        self.resources = Some(resources);
        self
    }

    /// Log sink for fetch/activation diagnostics
    pub fn logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Initial fetch settings
    pub fn settings(mut self, settings: ConfigSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Whether the host platform supports clearing config state
    pub fn supports_reset(mut self, supports_reset: bool) -> Self {
        self.supports_reset = supports_reset;
        self
    }

    pub fn build(self) -> ConfigResult<RemoteConfig> {
        let transport = self.transport.ok_or_else(|| {
            ConfigError::InvalidArgument("a transport must be configured".to_string())
        })?;
        let resources: Arc<dyn ResourceLoader> = match self.resources {
            Some(resources) => resources,
            None => Arc::new(FileResourceLoader::user()),
        };
        let logger: Arc<dyn Logger> = match self.logger {
            Some(logger) => logger,
            None => Arc::new(NoOpLogger::new()),
        };

        Ok(RemoteConfig::from_parts(
            ConfigStore::new(self.supports_reset),
            transport,
            resources,
            logger,
            self.settings,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MockTransport;
    use crate::types::ConfigSettingsUpdate;

    #[test]
    fn test_transport_is_required() {
        let err = RemoteConfigBuilder::new().build().unwrap_err();
        assert_eq!(err.code(), "invalid_argument");
    }

    #[test]
    fn test_defaults_and_overrides() {
        let config = RemoteConfig::builder()
            .transport(Arc::new(MockTransport::empty()))
            .settings(ConfigSettings {
                minimum_fetch_interval_millis: 3000,
                fetch_timeout_millis: 10_000,
            })
            .build()
            .unwrap();

        assert_eq!(config.settings().minimum_fetch_interval_millis, 3000);
        assert_eq!(config.settings().fetch_timeout_millis, 10_000);

        config.set_config_settings(ConfigSettingsUpdate::new().fetch_timeout_millis(3000));
        assert_eq!(config.settings().fetch_timeout_millis, 3000);
        assert_eq!(config.settings().minimum_fetch_interval_millis, 3000);
    }
}
