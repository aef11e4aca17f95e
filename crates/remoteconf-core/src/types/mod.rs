//! Core types for remote config resolution
//!
//! This module contains the shared types used across the store, controller
//! and collaborator seams.

mod default_value;
mod settings;
mod status;
mod value;

pub use default_value::DefaultValue;
pub use settings::{
    ConfigSettings, ConfigSettingsUpdate, DEFAULT_FETCH_TIMEOUT_MILLIS,
    DEFAULT_MINIMUM_FETCH_INTERVAL_MILLIS,
};
pub use status::FetchStatus;
pub use value::{ConfigValue, ValueSource};
