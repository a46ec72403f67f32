// src/internal/logger/timestamp.rs

use chrono::{Local, NaiveDateTime};
use std::fmt::Write;

use super::error::LogError;
use super::render::SliceWriter;
use super::severity::{ANSI_GREY, ANSI_RESET};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Size of the fixed buffer the timestamp (with color codes) is rendered into.
pub const TIMESTAMP_BUFFER_BYTES: usize = 40;

/// Source of local wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at one instant, for reproducible output.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Render `now` as `YYYY-MM-DD HH:MM:SS` into `buf`, grey when `color` is set.
///
/// Fails with `TimeFormat` when chrono reports an error, when the text does
/// not fit, or when nothing was produced.
pub fn format_timestamp<'a>(
    buf: &'a mut [u8],
    now: &NaiveDateTime,
    color: bool,
) -> Result<&'a str, LogError> {
    let mut writer = SliceWriter::new(buf);
    let written = if color {
        write!(writer, "{}{}{}", ANSI_GREY, now.format(TIMESTAMP_FORMAT), ANSI_RESET)
    } else {
        write!(writer, "{}", now.format(TIMESTAMP_FORMAT))
    };
    written.map_err(|_| LogError::TimeFormat)?;

    if writer.required() == 0 {
        return Err(LogError::TimeFormat);
    }
    writer.into_str().ok_or(LogError::TimeFormat)
}
