use config::{Config, ConfigError, Environment, Map};
use serde::{Deserialize, Serialize};

use crate::internal::logger::Severity;

// Version information from build script - using option_env! for safety
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default size of the stack window messages are first rendered into.
pub const DEFAULT_STACK_BUFFER_BYTES: usize = 512;

/// Size of the stack array backing the render window; the configured
/// `stack_buffer_bytes` may not exceed it.
pub const MAX_STACK_BUFFER_BYTES: usize = 4096;

pub const ENV_PREFIX: &str = "TINT_LOG";

/// Get version information
pub fn get_version_info() -> String {
    let build_timestamp = option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown");
    let build_date = option_env!("VERGEN_BUILD_DATE").unwrap_or("unknown");
    let rustc_semver = option_env!("VERGEN_RUSTC_SEMVER").unwrap_or("unknown");
    let cargo_target_triple = option_env!("VERGEN_CARGO_TARGET_TRIPLE").unwrap_or("unknown");
    let os_version = option_env!("VERGEN_SYSINFO_OS_VERSION").unwrap_or("unknown");

    format!(
        "tint-log version {}\n\
         Built: {} ({}) on {}\n\
         Rust: {}\n\
         Target: {}",
        VERSION, build_date, build_timestamp, os_version, rustc_semver, cargo_target_triple
    )
}

/// Logger settings, fixed for the lifetime of a `Logger`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggerConfig {
    #[serde(default)]
    pub min_severity: Severity,
    #[serde(default = "default_stack_buffer_bytes")]
    pub stack_buffer_bytes: usize,
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_stack_buffer_bytes() -> usize {
    DEFAULT_STACK_BUFFER_BYTES
}
fn default_true() -> bool {
    true
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_severity: Severity::Debug,
            stack_buffer_bytes: DEFAULT_STACK_BUFFER_BYTES,
            color: true,
        }
    }
}

impl LoggerConfig {
    /// Load from `TINT_LOG_*` environment variables over the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Like [`LoggerConfig::load`], reading variables from `vars` instead of
    /// the process environment when given.
    pub fn load_from(vars: Option<Map<String, String>>) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("min_severity", "debug")?
            .set_default("stack_buffer_bytes", DEFAULT_STACK_BUFFER_BYTES as i64)?
            .set_default("color", true)?
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(vars),
            )
            .build()?;

        let logger_config: LoggerConfig = config.try_deserialize()?;
        logger_config.validate()?;
        Ok(logger_config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stack_buffer_bytes == 0 || self.stack_buffer_bytes > MAX_STACK_BUFFER_BYTES {
            return Err(ConfigError::Message(format!(
                "stack_buffer_bytes must be between 1 and {}, got {}",
                MAX_STACK_BUFFER_BYTES, self.stack_buffer_bytes
            )));
        }
        Ok(())
    }

    pub fn with_min_severity(mut self, min_severity: Severity) -> Self {
        self.min_severity = min_severity;
        self
    }

    pub fn with_stack_buffer_bytes(mut self, stack_buffer_bytes: usize) -> Self {
        self.stack_buffer_bytes = stack_buffer_bytes;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}
