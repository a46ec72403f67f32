pub mod cli;
pub mod internal;

// Re-export commonly used types
pub use internal::config::{config, LoggerConfig};
pub use internal::logger::{
    global, init_logger, set_global, LineSink, LogError, Logger, MemorySink, Severity,
};
