//! Remote config handle and fetch controller
//!
//! [`RemoteConfig`] is the explicit per-instance handle callers hold; there
//! is no module-level singleton. It composes the layered store, the fetch
//! controller state and the injected collaborators (transport, resource
//! loader, logger).
//!
//! Fetch never mutates the store directly: a successful fetch stages a
//! snapshot, and only `activate` promotes it into the store's activated
//! layer. Readers therefore never observe partially-fetched data.

mod builder;

pub use builder::RemoteConfigBuilder;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use parking_lot::{Mutex, RwLock};
use tokio::sync::OnceCell;

use crate::error::{ConfigError, ConfigResult};
use crate::logging::Logger;
use crate::resources::ResourceLoader;
use crate::store::{ConfigStore, ResetOutcome};
use crate::transport::ConfigTransport;
use crate::types::{
    ConfigSettings, ConfigSettingsUpdate, ConfigValue, DefaultValue, FetchStatus,
};

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[derive(Debug, Default)]
struct ControllerState {
    last_fetch_status: FetchStatus,
    fetch_time_millis: Option<u64>,
    staged: Option<HashMap<String, String>>,
}

struct Inner {
    store: ConfigStore,
    transport: Arc<dyn ConfigTransport>,
    resources: Arc<dyn ResourceLoader>,
    logger: Arc<dyn Logger>,
    settings: RwLock<ConfigSettings>,
    controller: Mutex<ControllerState>,
    init: OnceCell<()>,
}

/// One remote config instance
///
/// Cheap to clone; clones share the same store and controller state.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use remoteconf_core::{RemoteConfig, transport::MockTransport};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let transport = Arc::new(MockTransport::empty());
/// let config = RemoteConfig::builder()
///     .transport(transport)
///     .build()
///     .unwrap();
///
/// config.ensure_initialized().await.unwrap();
/// let activated = config.fetch_and_activate().await;
/// assert!(!activated); // nothing remote to promote
/// # }
/// ```
#[derive(Clone)]
pub struct RemoteConfig {
    inner: Arc<Inner>,
}

impl RemoteConfig {
    pub fn builder() -> RemoteConfigBuilder {
        RemoteConfigBuilder::new()
    }

    pub(crate) fn from_parts(
        store: ConfigStore,
        transport: Arc<dyn ConfigTransport>,
        resources: Arc<dyn ResourceLoader>,
        logger: Arc<dyn Logger>,
        settings: ConfigSettings,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                store,
                transport,
                resources,
                logger,
                settings: RwLock::new(settings),
                controller: Mutex::new(ControllerState::default()),
                init: OnceCell::new(),
            }),
        }
    }

    // ----- store surface -----

    /// Resolve one key against activated > default > static precedence
    pub fn get_value(&self, key: &str) -> ConfigResult<ConfigValue> {
        self.inner.store.get_value(key)
    }

    /// Every key present in either layer, resolved per-key
    pub fn get_all(&self) -> HashMap<String, ConfigValue> {
        self.inner.store.get_all()
    }

    /// Replace the defaults layer; values canonicalize to their string form
    pub fn set_defaults(&self, defaults: HashMap<String, DefaultValue>) {
        self.inner.store.set_defaults(defaults);
    }

    /// Load a named resource and apply it exactly like `set_defaults`
    pub fn set_defaults_from_resource(&self, name: &str) -> ConfigResult<()> {
        let defaults = self.inner.resources.load(name).map_err(|e| {
            self.inner
                .logger
                .error(&format!("loading defaults resource '{name}': {e}"));
            e
        })?;
        self.inner.store.set_defaults(defaults);
        Ok(())
    }

    /// Plain key/value view of the defaults layer
    pub fn default_config(&self) -> HashMap<String, String> {
        self.inner.store.default_config()
    }

    /// Clear defaults and activated config, if the host platform allows it
    pub fn reset(&self) -> ResetOutcome {
        let outcome = self.inner.store.reset();
        if outcome == ResetOutcome::Cleared {
            let mut ctl = self.inner.controller.lock();
            ctl.staged = None;
        }
        outcome
    }

    // ----- settings surface -----

    /// Current fetch settings
    pub fn settings(&self) -> ConfigSettings {
        *self.inner.settings.read()
    }

    /// Apply a partial settings update; unset fields retain prior values.
    /// Takes effect for subsequent fetches only.
    pub fn set_config_settings(&self, update: ConfigSettingsUpdate) {
        self.inner.settings.write().apply(update);
    }

    // ----- controller surface -----

    /// Outcome of the most recent fetch attempt
    pub fn last_fetch_status(&self) -> FetchStatus {
        self.inner.controller.lock().last_fetch_status
    }

    /// Timestamp (ms since epoch) of the last completed fetch, if any
    pub fn fetch_time_millis(&self) -> Option<u64> {
        self.inner.controller.lock().fetch_time_millis
    }

    /// Fetch a fresh snapshot into the stage
    ///
    /// The effective throttle window is `min_interval_override` when given,
    /// else the configured `minimum_fetch_interval_millis`. An override of
    /// `0` forces an unconditional fetch. A throttled or failed fetch leaves
    /// the staged snapshot untouched.
    pub async fn fetch(&self, min_interval_override: Option<u64>) -> FetchStatus {
        let effective_interval = min_interval_override
            .unwrap_or_else(|| self.settings().minimum_fetch_interval_millis);

        if effective_interval > 0 {
            let last = self.inner.controller.lock().fetch_time_millis;
            if let Some(last) = last {
                let elapsed = now_millis().saturating_sub(last);
                if elapsed < effective_interval {
                    let mut ctl = self.inner.controller.lock();
                    ctl.last_fetch_status = FetchStatus::Throttled;
                    self.inner.logger.warn(&format!(
                        "fetch throttled: {elapsed} ms since last fetch, window is {effective_interval} ms"
                    ));
                    return FetchStatus::Throttled;
                }
            }
        }

        // No lock is held across the transport await; readers keep serving
        // the currently activated data.
        match self.inner.transport.fetch_config().await {
            Ok(snapshot) => {
                let mut ctl = self.inner.controller.lock();
                self.inner
                    .logger
                    .debug(&format!("fetch succeeded, staged {} keys", snapshot.len()));
                ctl.staged = Some(snapshot);
                ctl.last_fetch_status = FetchStatus::Success;
                ctl.fetch_time_millis = Some(now_millis());
                FetchStatus::Success
            }
            Err(err) => {
                let mut ctl = self.inner.controller.lock();
                ctl.last_fetch_status = FetchStatus::Failure;
                self.inner.logger.error(&format!("fetch failed: {err}"));
                FetchStatus::Failure
            }
        }
    }

    /// Promote the staged snapshot into the store's activated layer
    ///
    /// Returns `true` iff the promoted content differs from the previously
    /// activated snapshot; `false` when nothing is staged or the content is
    /// identical. The stage is consumed either way. Never fails.
    pub fn activate(&self) -> bool {
        let staged = self.inner.controller.lock().staged.take();
        match staged {
            Some(snapshot) => {
                let changed = self.inner.store.activate_snapshot(snapshot);
                self.inner
                    .logger
                    .debug(&format!("activate: changed={changed}"));
                changed
            }
            None => false,
        }
    }

    /// `fetch` with the configured throttle window, then `activate`
    ///
    /// Activation is independent of the latest fetch's outcome: a previously
    /// staged snapshot still activates after a throttled or failed fetch.
    pub async fn fetch_and_activate(&self) -> bool {
        self.fetch(None).await;
        self.activate()
    }

    /// Idempotent readiness barrier
    ///
    /// Awaits the transport's readiness exactly once per instance; all
    /// concurrent callers resolve together. Produces no value, and fails
    /// only if the transport cannot be brought up.
    pub async fn ensure_initialized(&self) -> ConfigResult<()> {
        let transport = self.inner.transport.clone();
        self.inner
            .init
            .get_or_try_init(|| async move {
                transport
                    .ensure_ready()
                    .await
                    .map_err(|e| ConfigError::Initialization(e.to_string()))
            })
            .await?;
        Ok(())
    }
}

impl std::fmt::Debug for RemoteConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteConfig")
            .field("settings", &self.settings())
            .field("last_fetch_status", &self.last_fetch_status())
            .field("fetch_time_millis", &self.fetch_time_millis())
            .finish()
    }
}
