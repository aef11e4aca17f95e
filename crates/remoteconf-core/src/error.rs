//! Error taxonomy for the remote config core
//!
//! Typed-value coercion is deliberately absent here: `as_number`/`as_bool`
//! never fail, they degrade to `0`/`false`.

use thiserror::Error;

/// Errors surfaced by remote config operations
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Caller supplied a malformed argument
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A named defaults resource could not be located
    #[error("resource '{name}' was not found")]
    ResourceNotFound { name: String },

    /// A defaults resource exists but could not be read or parsed
    #[error("resource '{name}' is malformed: {reason}")]
    Resource { name: String, reason: String },

    /// The underlying transport could not be brought up
    #[error("initialization failed: {0}")]
    Initialization(String),

    /// Transport-level failure, for callers driving the transport seam
    /// directly
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl ConfigError {
    /// Stable machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::InvalidArgument(_) => "invalid_argument",
            ConfigError::ResourceNotFound { .. } => "resource_not_found",
            ConfigError::Resource { .. } => "resource_parse",
            ConfigError::Initialization(_) => "initialization",
            ConfigError::Transport(_) => "transport",
        }
    }

    /// The key-validation error every lookup boundary raises
    pub(crate) fn invalid_key() -> Self {
        ConfigError::InvalidArgument(
            "config key must be a string with at least one character".to_string(),
        )
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors produced by the fetch transport collaborator
#[derive(Error, Debug, Clone)]
pub enum TransportError {
    #[error("transport unavailable: {0}")]
    Unavailable(String),

    #[error("fetch timed out after {0} ms")]
    Timeout(u64),

    #[error("transport error: {0}")]
    Other(String),
}

pub type TransportResult<T> = Result<T, TransportError>;
