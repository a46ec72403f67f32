// src/internal/logger/bridge.rs

use std::fmt::{self, Write};
use std::sync::Arc;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    layer::{Context, SubscriberExt},
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

use super::logger::Logger;
use super::severity::Severity;
use super::sink::{LineSink, StdoutSink};
use super::timestamp::{Clock, SystemClock};
use crate::internal::config::LoggerConfig;

/// Initialize the global `tracing` subscriber so events are printed by a
/// stdout `Logger` built from `cfg`.
///
/// `RUST_LOG` takes precedence over `cfg.min_severity` for the `tracing`
/// filter; the logger's own threshold still applies afterwards.
pub fn init_logger(cfg: &LoggerConfig) -> anyhow::Result<()> {
    let logger = Logger::new(cfg.clone())?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback_filter(cfg.min_severity));

    tracing_subscriber::registry()
        .with(filter)
        .with(TintLayer::new(logger))
        .try_init()?;

    Ok(())
}

/// Filter used when `RUST_LOG` is unset: the same cut-off as `min_severity`.
pub fn fallback_filter(min_severity: Severity) -> EnvFilter {
    EnvFilter::new(min_severity.as_directive())
}

/// Map a `tracing` level onto a severity. TRACE folds into debug.
pub fn severity_for_level(level: &Level) -> Severity {
    match *level {
        Level::TRACE | Level::DEBUG => Severity::Debug,
        Level::INFO => Severity::Info,
        Level::WARN => Severity::Warning,
        Level::ERROR => Severity::Error,
    }
}

/// `tracing_subscriber` layer that forwards every event to a [`Logger`].
pub struct TintLayer<S = StdoutSink, C = SystemClock> {
    logger: Arc<Logger<S, C>>,
}

impl<S, C> TintLayer<S, C> {
    pub fn new(logger: Logger<S, C>) -> Self {
        Self {
            logger: Arc::new(logger),
        }
    }

    pub fn from_shared(logger: Arc<Logger<S, C>>) -> Self {
        Self { logger }
    }
}

impl<Sub, S, C> Layer<Sub> for TintLayer<S, C>
where
    Sub: Subscriber,
    S: LineSink + 'static,
    C: Clock + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, Sub>) {
        let severity = severity_for_level(event.metadata().level());
        if !self.logger.should_show(severity) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        visitor.message.push_str(&visitor.fields);

        if let Err(e) = self.logger.log(severity, format_args!("{}", visitor.message.trim_start())) {
            eprintln!("tint-log: failed to emit tracing event: {}", e);
        }
    }
}

/// Written in place of a field whose `Debug` or `Display` impl fails.
pub const UNPRINTABLE: &str = "<unprintable>";

/// Collects the `message` field first, then the rest as `key=value`.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn push_field(&mut self, field: &Field, value: fmt::Arguments<'_>) {
        let target = if field.name() == "message" {
            &mut self.message
        } else {
            self.fields.push(' ');
            self.fields.push_str(field.name());
            self.fields.push('=');
            &mut self.fields
        };

        let start = target.len();
        if target.write_fmt(value).is_err() {
            target.truncate(start);
            target.push_str(UNPRINTABLE);
        }
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.push_field(field, format_args!("{}", value));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.push_field(field, format_args!("{:?}", value));
    }
}
