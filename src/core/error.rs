//! Error types for the message-handling system

pub type Result<T> = std::result::Result<T, MessageError>;

#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    /// Mutually exclusive logger sourcing options were both supplied
    #[error(
        "must choose between providing an existing logger or specifying \
         initialization arguments, cannot do both"
    )]
    ConfigurationConflict,

    /// Unrecognized severity level string
    #[error("invalid option for logger level: '{value}'")]
    InvalidLevel { value: String },

    /// Log file could not be opened for append
    #[error("cannot open log file '{path}' for append: {source}")]
    LogFileUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed label CSV row
    #[error("malformed row in '{path}' line {line}: {message}")]
    Csv {
        path: String,
        line: usize,
        message: String,
    },

    /// ffmpeg could not be executed or exited with a failure
    #[error("ffmpeg error: {0}")]
    Ffmpeg(String),
}

impl MessageError {
    /// Create a log file error with path context
    pub fn log_file(path: impl Into<String>, source: std::io::Error) -> Self {
        MessageError::LogFileUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid level error
    pub fn invalid_level(value: impl Into<String>) -> Self {
        MessageError::InvalidLevel {
            value: value.into(),
        }
    }

    /// Create a CSV row error
    pub fn csv(path: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        MessageError::Csv {
            path: path.into(),
            line,
            message: message.into(),
        }
    }

    /// Create an ffmpeg error
    pub fn ffmpeg(message: impl Into<String>) -> Self {
        MessageError::Ffmpeg(message.into())
    }
}
