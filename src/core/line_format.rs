//! Log line rendering
//!
//! A `LineFormat` is a template string rendered once per emitted entry.
//! Recognized placeholders: `{timestamp}`, `{level}`, `{name}`, `{message}`.
//! Everything else in the template is reproduced verbatim.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::log_entry::LogEntry;

/// Default line template: timestamp, severity, logger name, message.
pub const DEFAULT_LINE_FORMAT: &str = "{timestamp}:{level}:{name}:{message}";

/// Timestamp format options for rendered log lines
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    #[default]
    Iso8601,

    /// RFC 3339 format: `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// Custom strftime format
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LineFormat {
    template: String,
    timestamp_format: TimestampFormat,
}

impl LineFormat {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            timestamp_format: TimestampFormat::default(),
        }
    }

    /// Build from an optional caller-supplied template.
    ///
    /// A supplied template is used verbatim; absence selects
    /// [`DEFAULT_LINE_FORMAT`].
    pub fn from_option(template: Option<&str>) -> Self {
        Self::new(template.unwrap_or(DEFAULT_LINE_FORMAT))
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Render one entry into a single log line (no trailing newline).
    pub fn render(&self, entry: &LogEntry, logger_name: &str) -> String {
        self.template
            .replace("{timestamp}", &self.timestamp_format.format(&entry.timestamp))
            .replace("{level}", entry.level.to_str())
            .replace("{name}", logger_name)
            .replace("{message}", &entry.message)
    }
}

impl Default for LineFormat {
    fn default() -> Self {
        Self::new(DEFAULT_LINE_FORMAT)
    }
}
