// src/internal/logger/render.rs

use std::borrow::Cow;
use std::fmt::{self, Write};

use super::error::LogError;

/// `fmt::Write` over a fixed byte slice that keeps counting past the end.
///
/// Bytes that do not fit are dropped, but `required` always holds the full
/// rendered length, so a caller can tell whether the output was truncated.
pub(crate) struct SliceWriter<'a> {
    buf: &'a mut [u8],
    required: usize,
}

impl<'a> SliceWriter<'a> {
    pub(crate) fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, required: 0 }
    }

    pub(crate) fn required(&self) -> usize {
        self.required
    }

    pub(crate) fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Rendered text, or `None` if it did not fit.
    pub(crate) fn into_str(self) -> Option<&'a str> {
        if self.required >= self.buf.len() {
            return None;
        }
        let required = self.required;
        let filled: &'a [u8] = self.buf;
        std::str::from_utf8(&filled[..required]).ok()
    }
}

impl Write for SliceWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let bytes = s.as_bytes();
        if let Some(room) = self.buf.get_mut(self.required..) {
            let n = room.len().min(bytes.len());
            room[..n].copy_from_slice(&bytes[..n]);
        }
        self.required += bytes.len();
        Ok(())
    }
}

/// Render `args` into `stack`, spilling to an exactly-sized heap buffer when
/// the message needs `stack.len()` bytes or more.
///
/// Returns `Cow::Borrowed` on the fast path and `Cow::Owned` on the fallback
/// path. The owned buffer is dropped with the `Cow`.
pub fn render_message<'a>(
    stack: &'a mut [u8],
    args: fmt::Arguments<'_>,
) -> Result<Cow<'a, str>, LogError> {
    let mut writer = SliceWriter::new(stack);
    writer.write_fmt(args).map_err(|_| LogError::Format)?;

    let required = writer.required();
    if required < writer.capacity() {
        return writer
            .into_str()
            .map(Cow::Borrowed)
            .ok_or(LogError::Format);
    }

    let mut heap = String::new();
    heap.try_reserve_exact(required)
        .map_err(|_| LogError::Allocation { requested: required })?;
    heap.write_fmt(args).map_err(|_| LogError::Format)?;

    Ok(Cow::Owned(heap))
}
