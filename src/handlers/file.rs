//! File handler implementation

use crate::core::{Handler, LineFormat, LogEntry, LogLevel, MessageError, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Binds a logger's output to a single destination file.
///
/// The file is opened in append mode and created if absent. Each emitted
/// entry is rendered through the handler's own line format and flushed
/// immediately, so an entry is durable before control returns to the caller.
#[derive(Debug)]
pub struct FileHandler {
    path: PathBuf,
    writer: BufWriter<File>,
    level: LogLevel,
    format: LineFormat,
}

impl FileHandler {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| MessageError::log_file(path.display().to_string(), e))?;

        Ok(Self {
            path,
            writer: BufWriter::new(file),
            level: LogLevel::Info,
            format: LineFormat::default(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn set_format(&mut self, format: LineFormat) {
        self.format = format;
    }

    pub fn format(&self) -> &LineFormat {
        &self.format
    }
}

impl Handler for FileHandler {
    fn emit(&mut self, entry: &LogEntry, logger_name: &str) -> Result<()> {
        let mut line = self.format.render(entry, logger_name);
        line.push('\n');
        self.writer.write_all(line.as_bytes())?;
        // Flushed per entry so the line is on disk before an error propagates.
        self.writer.flush()?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn level(&self) -> LogLevel {
        self.level
    }

    fn set_level(&mut self, level: LogLevel) {
        self.level = level;
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileHandler {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}
