//! RemoteConf Core
//!
//! Runtime-agnostic remote config core: a typed value store with layered
//! precedence (remote > default > static) and a staged fetch/activate
//! controller. The actual transport and platform persistence live in the
//! host SDK; this crate depends on them only through injected trait seams.
//!
//! ## Fetch / activate flow
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use remoteconf_core::{RemoteConfig, transport::MockTransport};
//!
//! let config = RemoteConfig::builder()
//!     .transport(Arc::new(MockTransport::empty()))
//!     .build()?;
//!
//! config.ensure_initialized().await?;
//! config.fetch(Some(0)).await;          // 0 bypasses the throttle window
//! if config.activate() {
//!     let flag = config.get_value("flag")?;
//!     println!("{} (source: {})", flag.as_bool(), flag.source());
//! }
//! ```

pub mod client;
pub mod error;
pub mod logging;
pub mod resources;
pub mod store;
pub mod transport;
pub mod types;

// Re-export the main surface
pub use client::{RemoteConfig, RemoteConfigBuilder};

pub use error::{ConfigError, ConfigResult, TransportError, TransportResult};

pub use types::{
    ConfigSettings, ConfigSettingsUpdate, ConfigValue, DefaultValue, FetchStatus, ValueSource,
    DEFAULT_FETCH_TIMEOUT_MILLIS, DEFAULT_MINIMUM_FETCH_INTERVAL_MILLIS,
};

pub use store::{ConfigStore, ResetOutcome};

pub use resources::{FileResourceLoader, MemoryResourceLoader, ResourceLoader};

pub use transport::{ConfigTransport, MockTransport};

pub use logging::{ConsoleLogger, Logger, NoOpLogger};
