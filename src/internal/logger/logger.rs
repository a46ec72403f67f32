// src/internal/logger/logger.rs

use config::ConfigError;
use std::fmt;

use super::error::LogError;
use super::render::render_message;
use super::severity::Severity;
use super::sink::{LineSink, Record, StdoutSink};
use super::timestamp::{format_timestamp, Clock, SystemClock, TIMESTAMP_BUFFER_BYTES};
use crate::internal::config::{LoggerConfig, DEFAULT_STACK_BUFFER_BYTES, MAX_STACK_BUFFER_BYTES};

/// Leveled console logger.
///
/// Holds an immutable [`LoggerConfig`] plus the sink lines go to and the clock
/// timestamps come from. Each call is independent; there is no internal
/// locking beyond what the sink does.
#[derive(Debug)]
pub struct Logger<S = StdoutSink, C = SystemClock> {
    config: LoggerConfig,
    sink: S,
    clock: C,
}

impl Logger {
    /// Logger writing to stdout with the system clock.
    pub fn new(config: LoggerConfig) -> Result<Self, ConfigError> {
        Self::with_parts(config, StdoutSink, SystemClock)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self {
            config: LoggerConfig::default(),
            sink: StdoutSink,
            clock: SystemClock,
        }
    }
}

impl<S: LineSink, C: Clock> Logger<S, C> {
    pub fn with_parts(config: LoggerConfig, sink: S, clock: C) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            sink,
            clock,
        })
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Whether records of `severity` pass the configured threshold.
    pub fn should_show(&self, severity: Severity) -> bool {
        severity >= self.config.min_severity
    }

    /// Format and emit one record.
    ///
    /// Returns the length in bytes of the rendered message, or `Ok(0)` when
    /// the severity is filtered out. `Severity::ShowNone` is rejected with
    /// [`LogError::InvalidArguments`] before anything else happens.
    pub fn log(&self, severity: Severity, args: fmt::Arguments<'_>) -> Result<usize, LogError> {
        if !severity.is_emittable() {
            return Err(LogError::InvalidArguments(severity.as_u8()));
        }
        if !self.should_show(severity) {
            return Ok(0);
        }

        // Only pay for the large array when the configured window needs it
        let window = self.config.stack_buffer_bytes;
        if window <= DEFAULT_STACK_BUFFER_BYTES {
            let mut stack = [0u8; DEFAULT_STACK_BUFFER_BYTES];
            self.emit(severity, &mut stack[..window], args)
        } else {
            let mut stack = [0u8; MAX_STACK_BUFFER_BYTES];
            self.emit(severity, &mut stack[..window.min(MAX_STACK_BUFFER_BYTES)], args)
        }
    }

    fn emit(
        &self,
        severity: Severity,
        stack: &mut [u8],
        args: fmt::Arguments<'_>,
    ) -> Result<usize, LogError> {
        let message = render_message(stack, args)?;

        let mut time_buf = [0u8; TIMESTAMP_BUFFER_BYTES];
        let now = self.clock.now();
        let timestamp = format_timestamp(&mut time_buf, &now, self.config.color)?;

        let record = Record {
            severity,
            timestamp,
            label: severity.styled(self.config.color),
            message: &message,
        };
        self.sink.write_record(&record)?;

        Ok(message.len())
    }

    /// [`Logger::log`] for a raw severity value such as one read from an FFI
    /// boundary or a wire format. Anything outside `1..=4` fails with
    /// [`LogError::InvalidArguments`]. That includes 0: it is not a severity,
    /// so it is rejected rather than treated as filtered out.
    pub fn log_raw(&self, level: u8, args: fmt::Arguments<'_>) -> Result<usize, LogError> {
        let severity = Severity::try_from(level)?;
        self.log(severity, args)
    }

    pub fn debug(&self, args: fmt::Arguments<'_>) -> Result<usize, LogError> {
        self.log(Severity::Debug, args)
    }

    pub fn info(&self, args: fmt::Arguments<'_>) -> Result<usize, LogError> {
        self.log(Severity::Info, args)
    }

    pub fn warning(&self, args: fmt::Arguments<'_>) -> Result<usize, LogError> {
        self.log(Severity::Warning, args)
    }

    pub fn error(&self, args: fmt::Arguments<'_>) -> Result<usize, LogError> {
        self.log(Severity::Error, args)
    }
}
