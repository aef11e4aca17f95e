//! Transport trait definition

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::TransportResult;

/// Transport abstraction over the platform SDK's remote fetch
///
/// Implementations own the transport mechanics (endpoints, retry, the
/// configured fetch timeout); the core only consumes the resulting
/// key/value snapshot.
#[async_trait]
pub trait ConfigTransport: Send + Sync {
    /// Fetch the current remote key/value set
    async fn fetch_config(&self) -> TransportResult<HashMap<String, String>>;

    /// Wait until the transport can serve fetches
    ///
    /// `ensure_initialized` awaits this exactly once per instance. The
    /// default is an immediately-ready transport.
    async fn ensure_ready(&self) -> TransportResult<()> {
        Ok(())
    }
}
