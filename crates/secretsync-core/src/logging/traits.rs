//! Logger trait definition

use std::sync::Arc;

/// Logger abstraction for diagnostics
///
/// Implementations:
/// - `NoOpLogger`: Silent logger for testing
/// - `ConsoleLogger`: Logs to stdout/stderr
///
/// User-facing list/sync output is not logging - it is returned as
/// structured values and rendered by the caller. The logger carries
/// diagnostics: swallowed credential-store failures, executed commands,
/// failed remote writes.
pub trait Logger: Send + Sync {
    /// Log a debug message
    fn debug(&self, message: &str);

    /// Log an info message
    fn info(&self, message: &str);

    /// Log a warning message
    fn warn(&self, message: &str);

    /// Log an error message
    fn error(&self, message: &str);
}

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;
