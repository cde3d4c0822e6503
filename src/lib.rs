//! # Subtitle Stills
//!
//! Still-frame extraction from subtitle label CSVs, built on a reusable
//! message-handling layer.
//!
//! ## Features
//!
//! - **Message handling**: one object routing console output, process
//!   warnings, and persistent logging, each independently toggleable
//! - **Shared loggers**: collaborating components write to one registry-owned
//!   destination
//! - **Thread safe**: optional lock-guarded dispatch for concurrent callers
//! - **Still extraction**: ffmpeg-driven frame grabs at CSV-listed positions

pub mod cli;
pub mod core;
pub mod extract;
pub mod handlers;
pub mod message;

pub mod prelude {
    pub use crate::core::{
        Handler, LineFormat, LogEntry, Logger, LoggerGenerator, LogLevel, MessageError, Result,
        TimestampFormat, DEFAULT_LINE_FORMAT, DEFAULT_LOGGER_NAME,
    };
    pub use crate::extract::{LabelRow, StillExtractor};
    pub use crate::handlers::FileHandler;
    pub use crate::message::{
        LoggerOptions, MessageHandler, MessageHandlerBuilder, StderrWarnings, WarningSink,
    };
}

pub use crate::core::{
    Handler, LineFormat, LogEntry, Logger, LoggerGenerator, LogLevel, MessageError, Result,
    TimestampFormat, DEFAULT_LINE_FORMAT, DEFAULT_LOGGER_NAME,
};
pub use crate::extract::{LabelRow, StillExtractor};
pub use crate::handlers::FileHandler;
pub use crate::message::{
    LoggerOptions, MessageHandler, MessageHandlerBuilder, StderrWarnings, WarningSink,
};
