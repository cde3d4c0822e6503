//! Core logger types and traits

pub mod error;
pub mod generator;
pub mod handler;
pub mod line_format;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod registry;

pub use error::{MessageError, Result};
pub use generator::{LoggerGenerator, DEFAULT_LOGGER_NAME};
pub use handler::Handler;
pub use line_format::{LineFormat, TimestampFormat, DEFAULT_LINE_FORMAT};
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::Logger;
