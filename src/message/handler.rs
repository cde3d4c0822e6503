//! Unified message dispatch
//!
//! `MessageHandler` is the single point of truth for "should this message
//! appear, and where" across three independent sinks: console output,
//! process warnings, and the persistent log. Components compose one as a
//! field and route all diagnostics through it instead of calling `println!`
//! or the warning channel directly.

use parking_lot::{Mutex, MutexGuard, RwLock};
use std::path::PathBuf;
use std::sync::Arc;

use crate::core::{Logger, LoggerGenerator, MessageError, Result};

use super::warning::{StderrWarnings, WarningSink};

/// Logger sourcing options, shared by construction and [`MessageHandler::set_logger`].
///
/// Exactly one sourcing strategy may be used: either adopt an existing
/// logger (`shared`) or specify parameters to build a new one. Supplying a
/// shared logger together with any construction parameter is a
/// [`MessageError::ConfigurationConflict`]. With neither, logging is
/// disabled and the handler runs in console-only or fully silent mode.
#[derive(Default, Clone)]
pub struct LoggerOptions {
    log_filepath: Option<PathBuf>,
    logger_name: Option<String>,
    logger_level: Option<String>,
    logger_format: Option<String>,
    shared_logger: Option<Arc<Logger>>,
}

impl LoggerOptions {
    /// No logger: console-only or fully silent mode.
    pub fn none() -> Self {
        Self::default()
    }

    /// Generate a new logger writing to `path`.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            log_filepath: Some(path.into()),
            ..Self::default()
        }
    }

    /// Adopt an existing logger by reference.
    pub fn shared(logger: Arc<Logger>) -> Self {
        Self {
            shared_logger: Some(logger),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn logger_name(mut self, name: impl Into<String>) -> Self {
        self.logger_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn logger_level(mut self, level: impl Into<String>) -> Self {
        self.logger_level = Some(level.into());
        self
    }

    #[must_use]
    pub fn logger_format(mut self, format: impl Into<String>) -> Self {
        self.logger_format = Some(format.into());
        self
    }

    fn resolve(self) -> Result<Option<Arc<Logger>>> {
        if self.shared_logger.is_some()
            && (self.log_filepath.is_some()
                || self.logger_name.is_some()
                || self.logger_level.is_some()
                || self.logger_format.is_some())
        {
            return Err(MessageError::ConfigurationConflict);
        }

        if let Some(shared) = self.shared_logger {
            return Ok(Some(shared));
        }

        let Some(path) = self.log_filepath else {
            return Ok(None);
        };

        let logger = LoggerGenerator::new(path, self.logger_name.as_deref())?
            .generate(self.logger_level.as_deref(), self.logger_format.as_deref())?;
        Ok(Some(logger))
    }
}

pub struct MessageHandler {
    verbose: bool,
    suppress_warnings: bool,
    thread_safe: bool,
    logger: RwLock<Option<Arc<Logger>>>,
    log_lock: Mutex<()>,
    warnings: Arc<dyn WarningSink>,
}

impl std::fmt::Debug for MessageHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageHandler")
            .field("verbose", &self.verbose)
            .field("suppress_warnings", &self.suppress_warnings)
            .field("thread_safe", &self.thread_safe)
            .finish_non_exhaustive()
    }
}

impl MessageHandler {
    #[must_use]
    pub fn builder() -> MessageHandlerBuilder {
        MessageHandlerBuilder::new()
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    pub fn suppress_warnings(&self) -> bool {
        self.suppress_warnings
    }

    pub fn set_suppress_warnings(&mut self, suppress: bool) {
        self.suppress_warnings = suppress;
    }

    pub fn thread_safe(&self) -> bool {
        self.thread_safe
    }

    /// Enable or disable lock-guarded dispatch for multi-threaded use.
    pub fn set_thread_safe(&mut self, thread_safe: bool) {
        self.thread_safe = thread_safe;
    }

    /// The active logger, if any. The returned `Arc` can be handed to
    /// another handler as a shared logger.
    pub fn logger(&self) -> Option<Arc<Logger>> {
        self.logger.read().clone()
    }

    /// Replace the active logger under the same validation rule as
    /// construction.
    ///
    /// Not covered by the dispatch lock: a concurrent `print`/`warn`/`raise`
    /// may observe either the old or the new logger. Accepted limitation.
    pub fn set_logger(&self, options: LoggerOptions) -> Result<()> {
        let logger = options.resolve()?;
        *self.logger.write() = logger;
        Ok(())
    }

    fn dispatch_guard(&self) -> Option<MutexGuard<'_, ()>> {
        self.thread_safe.then(|| self.log_lock.lock())
    }

    fn current_logger(&self) -> Option<Arc<Logger>> {
        self.logger.read().clone()
    }

    /// Echo `message` to the console when verbose, and record it at INFO
    /// severity when a logger is present. The two sinks are independent.
    pub fn print(&self, message: impl AsRef<str>) {
        let _guard = self.dispatch_guard();
        let message = message.as_ref();
        if self.verbose {
            println!("{}", message);
        }
        if let Some(logger) = self.current_logger() {
            logger.info(message);
        }
    }

    /// Surface a non-fatal warning unless suppressed, and record it at
    /// WARNING severity when a logger is present. Suppression never affects
    /// the log.
    pub fn warn(&self, message: impl AsRef<str>) {
        let _guard = self.dispatch_guard();
        let message = message.as_ref();
        if !self.suppress_warnings {
            self.warnings.emit(message);
        }
        if let Some(logger) = self.current_logger() {
            logger.warning(message);
        }
    }

    /// Record `error` (message plus its source chain) at ERROR severity,
    /// then hand it back for the caller to propagate.
    ///
    /// The log write completes and is flushed before this returns; the error
    /// is never swallowed. Typical use:
    ///
    /// ```ignore
    /// return Err(messages.raise(err));
    /// ```
    pub fn raise<E: std::error::Error>(&self, error: E) -> E {
        let _guard = self.dispatch_guard();
        if let Some(logger) = self.current_logger() {
            logger.error(render_error_chain(&error));
            let _ = logger.flush();
        }
        error
    }
}

/// Render an error's display text followed by its full source chain.
fn render_error_chain(error: &dyn std::error::Error) -> String {
    let mut text = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        text.push_str(": caused by: ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}

/// Builder for [`MessageHandler`] with a fluent API
///
/// # Example
/// ```no_run
/// use subtitle_stills::prelude::*;
///
/// let messages = MessageHandler::builder()
///     .verbose(true)
///     .log_filepath("extract.log")
///     .logger_name("extractor")
///     .build()
///     .unwrap();
/// messages.print("starting up");
/// ```
pub struct MessageHandlerBuilder {
    verbose: bool,
    suppress_warnings: bool,
    thread_safe: bool,
    options: LoggerOptions,
    warnings: Option<Arc<dyn WarningSink>>,
}

impl MessageHandlerBuilder {
    pub fn new() -> Self {
        Self {
            verbose: false,
            suppress_warnings: false,
            thread_safe: false,
            options: LoggerOptions::none(),
            warnings: None,
        }
    }

    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    #[must_use]
    pub fn suppress_warnings(mut self, suppress: bool) -> Self {
        self.suppress_warnings = suppress;
        self
    }

    #[must_use]
    pub fn thread_safe(mut self, thread_safe: bool) -> Self {
        self.thread_safe = thread_safe;
        self
    }

    #[must_use]
    pub fn log_filepath(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.log_filepath = Some(path.into());
        self
    }

    #[must_use]
    pub fn logger_name(mut self, name: impl Into<String>) -> Self {
        self.options.logger_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn logger_level(mut self, level: impl Into<String>) -> Self {
        self.options.logger_level = Some(level.into());
        self
    }

    #[must_use]
    pub fn logger_format(mut self, format: impl Into<String>) -> Self {
        self.options.logger_format = Some(format.into());
        self
    }

    #[must_use]
    pub fn shared_logger(mut self, logger: Arc<Logger>) -> Self {
        self.options.shared_logger = Some(logger);
        self
    }

    /// Replace the default stderr warning sink.
    #[must_use]
    pub fn warning_sink(mut self, sink: Arc<dyn WarningSink>) -> Self {
        self.warnings = Some(sink);
        self
    }

    pub fn build(self) -> Result<MessageHandler> {
        let logger = self.options.resolve()?;
        Ok(MessageHandler {
            verbose: self.verbose,
            suppress_warnings: self.suppress_warnings,
            thread_safe: self.thread_safe,
            logger: RwLock::new(logger),
            log_lock: Mutex::new(()),
            warnings: self.warnings.unwrap_or_else(|| Arc::new(StderrWarnings)),
        })
    }
}

impl Default for MessageHandlerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
