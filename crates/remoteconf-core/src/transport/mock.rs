//! Mock transport for testing
//!
//! Deterministic, configurable snapshots without network dependencies.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use super::traits::ConfigTransport;
use crate::error::{TransportError, TransportResult};

/// Mock response mode
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Every fetch yields the same snapshot
    Fixed(HashMap<String, String>),
    /// Each fetch yields the next snapshot; the last one repeats
    Sequence(Vec<HashMap<String, String>>),
    /// Every fetch fails with this message
    Failing(String),
    /// Every fetch yields an empty snapshot
    Empty,
}

/// Mock transport for driving the fetch controller in tests
pub struct MockTransport {
    mode: MockMode,
    cursor: Mutex<usize>,
    ready_error: Option<String>,
    fetches: AtomicUsize,
    ready_calls: AtomicUsize,
}

impl MockTransport {
    pub fn new(mode: MockMode) -> Self {
        Self {
            mode,
            cursor: Mutex::new(0),
            ready_error: None,
            fetches: AtomicUsize::new(0),
            ready_calls: AtomicUsize::new(0),
        }
    }

    /// Transport that always serves the given snapshot
    pub fn fixed(snapshot: HashMap<String, String>) -> Self {
        Self::new(MockMode::Fixed(snapshot))
    }

    /// Transport that serves the given snapshots in order
    pub fn sequence(snapshots: Vec<HashMap<String, String>>) -> Self {
        Self::new(MockMode::Sequence(snapshots))
    }

    /// Transport whose fetches always fail
    pub fn failing(message: impl Into<String>) -> Self {
        Self::new(MockMode::Failing(message.into()))
    }

    /// Transport that serves an empty snapshot
    pub fn empty() -> Self {
        Self::new(MockMode::Empty)
    }

    /// Make `ensure_ready` fail with this message
    pub fn with_ready_error(mut self, message: impl Into<String>) -> Self {
        self.ready_error = Some(message.into());
        self
    }

    /// Number of fetches attempted against this transport
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    /// Number of readiness checks performed against this transport
    pub fn ready_count(&self) -> usize {
        self.ready_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConfigTransport for MockTransport {
    async fn fetch_config(&self) -> TransportResult<HashMap<String, String>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        match &self.mode {
            MockMode::Fixed(snapshot) => Ok(snapshot.clone()),
            MockMode::Sequence(snapshots) => {
                let mut cursor = self.cursor.lock();
                let index = (*cursor).min(snapshots.len().saturating_sub(1));
                *cursor += 1;
                snapshots
                    .get(index)
                    .cloned()
                    .ok_or_else(|| TransportError::Other("empty sequence".to_string()))
            }
            MockMode::Failing(message) => Err(TransportError::Other(message.clone())),
            MockMode::Empty => Ok(HashMap::new()),
        }
    }

    async fn ensure_ready(&self) -> TransportResult<()> {
        self.ready_calls.fetch_add(1, Ordering::SeqCst);
        match &self.ready_error {
            Some(message) => Err(TransportError::Unavailable(message.clone())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_fixed_mode_repeats() {
        let transport = MockTransport::fixed(snapshot(&[("number", "1337")]));

        for _ in 0..2 {
            let fetched = transport.fetch_config().await.unwrap();
            assert_eq!(fetched["number"], "1337");
        }
        assert_eq!(transport.fetch_count(), 2);
    }

    #[tokio::test]
    async fn test_sequence_mode_advances_then_repeats_last() {
        let transport = MockTransport::sequence(vec![
            snapshot(&[("k", "first")]),
            snapshot(&[("k", "second")]),
        ]);

        assert_eq!(transport.fetch_config().await.unwrap()["k"], "first");
        assert_eq!(transport.fetch_config().await.unwrap()["k"], "second");
        assert_eq!(transport.fetch_config().await.unwrap()["k"], "second");
    }

    #[tokio::test]
    async fn test_failing_mode() {
        let transport = MockTransport::failing("connection refused");
        let err = transport.fetch_config().await.unwrap_err();
        assert!(err.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_ready_error_injection() {
        let transport = MockTransport::empty().with_ready_error("sdk not configured");
        assert!(transport.ensure_ready().await.is_err());
        assert_eq!(transport.ready_count(), 1);

        let ready = MockTransport::empty();
        assert!(ready.ensure_ready().await.is_ok());
    }
}
