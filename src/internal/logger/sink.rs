// src/internal/logger/sink.rs

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use super::severity::{Severity, StyledLabel};

/// One formatted log line, borrowed from the buffers of a single `log` call.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub severity: Severity,
    pub timestamp: &'a str,
    pub label: StyledLabel,
    pub message: &'a str,
}

/// Renders the line without its trailing newline.
impl fmt::Display for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  [{}] {}", self.timestamp, self.label, self.message)
    }
}

/// Destination for finished records.
///
/// A sink writes the whole line in one go; concurrent callers see lines that
/// are only as atomic as the sink makes them.
pub trait LineSink: Send + Sync {
    fn write_record(&self, record: &Record<'_>) -> io::Result<()>;
}

/// Writes to the process's standard output, holding the stdout lock for the
/// whole line.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl LineSink for StdoutSink {
    fn write_record(&self, record: &Record<'_>) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", record)?;
        out.flush()
    }
}

/// Keeps every line in memory. Clones share the same storage.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured lines, each including its trailing newline.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    pub fn contents(&self) -> String {
        self.lines().concat()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().map(|lines| lines.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.clear();
        }
    }
}

impl LineSink for MemorySink {
    fn write_record(&self, record: &Record<'_>) -> io::Result<()> {
        let line = format!("{}\n", record);
        self.lines
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "memory sink poisoned"))?
            .push(line);
        Ok(())
    }
}
