// src/internal/logger/mod.rs

pub mod bridge;
pub mod error;
pub mod global;
pub mod logger;
mod macros;
pub mod render;
pub mod severity;
pub mod sink;
pub mod timestamp;

pub use bridge::{fallback_filter, init_logger, severity_for_level, TintLayer};
pub use error::LogError;
pub use global::{global, set_global};
pub use logger::Logger;
pub use render::render_message;
pub use severity::{ParseSeverityError, Severity, StyledLabel};
pub use sink::{LineSink, MemorySink, Record, StdoutSink};
pub use timestamp::{format_timestamp, Clock, FixedClock, SystemClock};

// Note: the tint_log!/log_* macros are exported at the crate root via #[macro_export]
