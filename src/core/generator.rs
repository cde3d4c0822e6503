//! Logger construction
//!
//! `LoggerGenerator` builds one fully configured logger: it resolves the
//! named logger through the registry, opens a file handler for the given
//! path, and on `generate` applies the severity threshold to both and the
//! line format to the handler alone.

use std::path::PathBuf;
use std::sync::Arc;

use super::{error::Result, handler::Handler, line_format::LineFormat, log_level::LogLevel, registry};
use crate::core::logger::Logger;
use crate::handlers::FileHandler;

/// Name assigned to the logger when the caller does not supply one.
pub const DEFAULT_LOGGER_NAME: &str = "messagehandler";

#[derive(Debug)]
pub struct LoggerGenerator {
    logger: Arc<Logger>,
    handler: FileHandler,
}

impl LoggerGenerator {
    /// Resolve the named logger and open a fresh file handler bound to
    /// `log_filepath`.
    ///
    /// Fails if the log file cannot be opened for append. An absent name
    /// selects [`DEFAULT_LOGGER_NAME`]. Because loggers are registry-owned,
    /// a second generator with the same name resolves to the same logger and
    /// `generate` will attach an additional handler to it.
    pub fn new(log_filepath: impl Into<PathBuf>, logger_name: Option<&str>) -> Result<Self> {
        let name = logger_name.unwrap_or(DEFAULT_LOGGER_NAME);
        Ok(Self {
            logger: registry::get_or_create(name),
            handler: FileHandler::new(log_filepath)?,
        })
    }

    /// Configure and return the logger.
    ///
    /// `level` is parsed case-insensitively (`debug`, `info`, `warning`,
    /// `error`, `critical`/`fatal`), defaulting to `info`; any other string
    /// is a hard failure. The resolved threshold is applied to both the
    /// logger and its handler. `format` is used verbatim when supplied and
    /// attached to the handler only.
    ///
    /// Each call attaches a new handler instance, with no deduplication
    /// against handlers already bound to the same path.
    pub fn generate(
        mut self,
        level: Option<&str>,
        format: Option<&str>,
    ) -> Result<Arc<Logger>> {
        let level = LogLevel::parse_option(level)?;
        self.logger.set_min_level(level);
        self.handler.set_level(level);

        self.handler.set_format(LineFormat::from_option(format));

        self.logger.add_handler(Box::new(self.handler));
        Ok(self.logger)
    }
}
