//! Message-handling capability object and its warning channel

pub mod handler;
pub mod warning;

pub use handler::{LoggerOptions, MessageHandler, MessageHandlerBuilder};
pub use warning::{StderrWarnings, WarningSink};
