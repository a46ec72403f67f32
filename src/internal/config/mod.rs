// src/internal/config/mod.rs

pub mod _config;

// Allow `internal::config::config::LoggerConfig` as well as the flat path
pub use _config as config;
pub use _config::{
    get_version_info, LoggerConfig, DEFAULT_STACK_BUFFER_BYTES, ENV_PREFIX,
    MAX_STACK_BUFFER_BYTES, VERSION,
};
