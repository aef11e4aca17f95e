//! Console logger implementation

use super::traits::Logger;

/// A logger that writes to stdout/stderr with a prefix
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    prefix: String,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    pub fn new() -> Self {
        Self {
            prefix: "[remoteconf]".to_string(),
        }
    }

    /// Use a custom prefix, e.g. the app name
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Logger for ConsoleLogger {
    fn debug(&self, message: &str) {
        eprintln!("{} DEBUG {}", self.prefix, message);
    }

    fn info(&self, message: &str) {
        println!("{} INFO {}", self.prefix, message);
    }

    fn warn(&self, message: &str) {
        eprintln!("{} WARN {}", self.prefix, message);
    }

    fn error(&self, message: &str) {
        eprintln!("{} ERROR {}", self.prefix, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_logger_prefix() {
        let logger = ConsoleLogger::new();
        assert_eq!(logger.prefix, "[remoteconf]");

        let custom = ConsoleLogger::with_prefix("[myapp]");
        assert_eq!(custom.prefix, "[myapp]");
    }
}
