//! Pluggable leveled logging for the transport layer.
//!
//! The HTTP transport traces every request and response through a [`Logger`]
//! held by the client configuration. The default is [`NoopLogger`], which drops
//! everything. [`TracingLogger`] forwards to the `tracing` ecosystem so records
//! show up wherever the application's subscriber sends them.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use woocommerce_api::log::{Level, TracingLogger};
//! use woocommerce_api::{ConsumerKey, ConsumerSecret, ShopUrl, WooCommerceConfig};
//!
//! let config = WooCommerceConfig::builder()
//!     .consumer_key(ConsumerKey::new("ck_key").unwrap())
//!     .consumer_secret(ConsumerSecret::new("cs_secret").unwrap())
//!     .shop(ShopUrl::new("shop.example.com").unwrap())
//!     .logger(Arc::new(TracingLogger::new(Level::Debug)))
//!     .build()
//!     .unwrap();
//! ```

use std::fmt;

/// Severity of a log record, ordered from most to least severe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Failures.
    Error,
    /// Unexpected but recoverable conditions.
    Warn,
    /// High-level progress.
    Info,
    /// Request/response tracing.
    Debug,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
        };
        f.write_str(name)
    }
}

/// A leveled logging sink.
///
/// Implementations must not panic; the transport never inspects the outcome of
/// a log call.
pub trait Logger: Send + Sync + fmt::Debug {
    /// Records a message at the given level.
    fn log(&self, level: Level, message: &str);

    /// Returns `true` if a record at `level` would be kept.
    ///
    /// Callers check this before building expensive messages.
    fn enabled(&self, _level: Level) -> bool {
        true
    }

    /// Records a message at [`Level::Error`].
    fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }

    /// Records a message at [`Level::Warn`].
    fn warn(&self, message: &str) {
        self.log(Level::Warn, message);
    }

    /// Records a message at [`Level::Info`].
    fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    /// Records a message at [`Level::Debug`].
    fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }
}

/// A logger that discards every record.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn log(&self, _level: Level, _message: &str) {}

    fn enabled(&self, _level: Level) -> bool {
        false
    }
}

/// A logger that forwards records at or above `level` to `tracing`.
#[derive(Clone, Copy, Debug)]
pub struct TracingLogger {
    level: Level,
}

impl TracingLogger {
    /// Creates a logger that emits records at `level` and more severe.
    #[must_use]
    pub const fn new(level: Level) -> Self {
        Self { level }
    }

    /// Returns the least severe level this logger emits.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new(Level::Info)
    }
}

impl Logger for TracingLogger {
    fn enabled(&self, level: Level) -> bool {
        level <= self.level
    }

    fn log(&self, level: Level, message: &str) {
        if !self.enabled(level) {
            return;
        }
        match level {
            Level::Error => tracing::error!(target: "woocommerce_api", "{message}"),
            Level::Warn => tracing::warn!(target: "woocommerce_api", "{message}"),
            Level::Info => tracing::info!(target: "woocommerce_api", "{message}"),
            Level::Debug => tracing::debug!(target: "woocommerce_api", "{message}"),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Captures records in memory for assertions.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingLogger {
        pub(crate) records: Mutex<Vec<(Level, String)>>,
    }

    impl Logger for RecordingLogger {
        fn log(&self, level: Level, message: &str) {
            if let Ok(mut records) = self.records.lock() {
                records.push((level, message.to_string()));
            }
        }
    }

    #[test]
    fn test_level_ordering_most_severe_first() {
        assert!(Level::Error < Level::Warn);
        assert!(Level::Warn < Level::Info);
        assert!(Level::Info < Level::Debug);
    }

    #[test]
    fn test_tracing_logger_filters_by_level() {
        let logger = TracingLogger::new(Level::Info);
        assert!(logger.enabled(Level::Error));
        assert!(logger.enabled(Level::Info));
        assert!(!logger.enabled(Level::Debug));
    }

    #[test]
    fn test_leveled_helpers_route_to_log() {
        let logger = RecordingLogger::default();
        logger.debug("d");
        logger.warn("w");

        let records = logger.records.lock().unwrap();
        assert_eq!(records[0], (Level::Debug, "d".to_string()));
        assert_eq!(records[1], (Level::Warn, "w".to_string()));
    }

    #[test]
    fn test_noop_logger_accepts_everything() {
        let logger = NoopLogger;
        logger.error("ignored");
        logger.debug("ignored");
        assert!(!logger.enabled(Level::Error));
    }

    #[test]
    fn test_custom_loggers_are_enabled_by_default() {
        let logger = RecordingLogger::default();
        assert!(logger.enabled(Level::Debug));
    }

    #[test]
    fn test_level_display() {
        assert_eq!(Level::Debug.to_string(), "DEBUG");
        assert_eq!(Level::Error.to_string(), "ERROR");
    }
}
