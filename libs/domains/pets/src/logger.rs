//! Activity log for pet operations.
//!
//! The service reports what happened through [`ActivityLogger`] rather than
//! calling `tracing` directly, so tests and embedders can capture or redirect
//! the events. Entries are advisory: nothing reads them back.

use serde_json::Value;
use strum::{Display, EnumString};

/// Severity of an activity entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Success,
    Debug,
}

#[cfg_attr(test, mockall::automock)]
pub trait ActivityLogger: Send + Sync {
    /// Record one event with structured context.
    fn log(&self, level: LogLevel, message: &str, meta: &Value);
}

/// Forwards activity entries to `tracing`.
///
/// `success` has no tracing level of its own and is emitted at INFO with
/// `outcome = "success"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingActivityLogger;

impl ActivityLogger for TracingActivityLogger {
    fn log(&self, level: LogLevel, message: &str, meta: &Value) {
        match level {
            LogLevel::Info => tracing::info!(meta = %meta, "{}", message),
            LogLevel::Success => tracing::info!(outcome = "success", meta = %meta, "{}", message),
            LogLevel::Warn => tracing::warn!(meta = %meta, "{}", message),
            LogLevel::Error => tracing::error!(meta = %meta, "{}", message),
            LogLevel::Debug => tracing::debug!(meta = %meta, "{}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn test_level_names() {
        assert_eq!(LogLevel::Success.to_string(), "success");
        assert_eq!(LogLevel::Warn.to_string(), "warn");
        assert_eq!(LogLevel::from_str("debug").unwrap(), LogLevel::Debug);
        assert!(LogLevel::from_str("verbose").is_err());
    }

    #[test]
    fn test_tracing_logger_accepts_every_level() {
        let logger = TracingActivityLogger;
        for level in [
            LogLevel::Info,
            LogLevel::Warn,
            LogLevel::Error,
            LogLevel::Success,
            LogLevel::Debug,
        ] {
            logger.log(level, "Pet listing retrieved.", &json!({ "count": 0 }));
        }
    }
}
