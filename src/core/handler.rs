//! Handler trait for log output destinations

use super::{error::Result, log_entry::LogEntry, log_level::LogLevel};

/// A logger's concrete output binding.
///
/// Each handler carries its own severity threshold and line format,
/// independent of the logger it is attached to.
pub trait Handler: Send + Sync {
    fn emit(&mut self, entry: &LogEntry, logger_name: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn level(&self) -> LogLevel;
    fn set_level(&mut self, level: LogLevel);
    fn name(&self) -> &str;
}
