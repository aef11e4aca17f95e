//! Logger trait definition

use std::sync::Arc;

/// Logger abstraction injected into the controller and loaders
///
/// Implementations:
/// - `NoOpLogger`: silent, the default
/// - `ConsoleLogger`: stdout/stderr with a prefix
/// - Host adapters: forward to the embedding platform's log channel
pub trait Logger: Send + Sync {
    fn debug(&self, message: &str);
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;
