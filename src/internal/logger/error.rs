// src/internal/logger/error.rs

/// Reasons a log call can fail. A failed call never writes a line.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("invalid severity {0}: only values below the show-none sentinel can be logged")]
    InvalidArguments(u8),
    #[error("message formatting failed")]
    Format,
    #[error("timestamp formatting failed")]
    TimeFormat,
    #[error("could not allocate {requested} bytes for an oversized message")]
    Allocation { requested: usize },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LogError {
    /// Stable numeric code, usable as a process exit status.
    pub fn code(&self) -> i32 {
        match self {
            LogError::InvalidArguments(_) => 1,
            LogError::Format => 2,
            LogError::TimeFormat => 3,
            LogError::Allocation { .. } => 4,
            LogError::Io(_) => 5,
        }
    }
}
