//! Library-wide error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum KitError {
    #[error("config error: {0}")]
    Config(String),

    #[error("logger error: {0}")]
    Logger(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("poll timed out after {waited_ms} ms")]
    PollTimeout { waited_ms: u64 },

    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid data uri: {0}")]
    InvalidDataUri(String),

    #[error("unknown easing curve: {0}")]
    UnknownEasing(String),

    #[error("runtime error: {0}")]
    Runtime(String),
}
