//! Named severity-thresholded logger

use parking_lot::RwLock;

use super::{
    error::Result,
    handler::Handler,
    log_entry::LogEntry,
    log_level::LogLevel,
};

/// A named message sink with a minimum severity threshold and zero or more
/// attached handlers.
///
/// Loggers are owned by the process-wide registry and shared through `Arc`,
/// so all configuration is interior-mutable: a threshold change made through
/// one holder is visible to every other holder of the same logger.
pub struct Logger {
    name: String,
    min_level: RwLock<LogLevel>,
    handlers: RwLock<Vec<Box<dyn Handler>>>,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("min_level", &self.min_level)
            .finish_non_exhaustive()
    }
}

impl Logger {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min_level: RwLock::new(LogLevel::Info),
            handlers: RwLock::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn min_level(&self) -> LogLevel {
        *self.min_level.read()
    }

    pub fn set_min_level(&self, level: LogLevel) {
        *self.min_level.write() = level;
    }

    /// Attach a handler. Handlers accumulate; nothing detaches them short of
    /// process exit.
    pub fn add_handler(&self, handler: Box<dyn Handler>) {
        self.handlers.write().push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.read().len()
    }

    /// Emit a message at the given level.
    ///
    /// Entries below the logger threshold are silently dropped. Each attached
    /// handler applies its own threshold on top. Handler write failures are
    /// reported to stderr and never propagate to the caller.
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        if level < *self.min_level.read() {
            return;
        }

        let entry = LogEntry::new(level, message.into());
        let mut handlers = self.handlers.write();
        for (idx, handler) in handlers.iter_mut().enumerate() {
            if entry.level < handler.level() {
                continue;
            }
            if let Err(e) = handler.emit(&entry, &self.name) {
                eprintln!("[LOGGER ERROR] handler #{} ({}) failed: {}", idx, handler.name(), e);
            }
        }
    }

    pub fn flush(&self) -> Result<()> {
        let mut handlers = self.handlers.write();
        for handler in handlers.iter_mut() {
            handler.flush()?;
        }
        Ok(())
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warning(&self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    pub fn critical(&self, message: impl Into<String>) {
        self.log(LogLevel::Critical, message);
    }
}
