//! Sinks for rendered log lines.
//!
//! This module provides the [`LogSink`] trait that lets the
//! [`TrafficLogger`](crate::TrafficLogger) fan a rendered entry out to any
//! number of destinations, along with the two built-in sinks: the process
//! standard output stream and an append-only file.
//!
//! A sink write never fails from the caller's point of view; failures are
//! counted by the observability module and otherwise dropped, and a failed
//! write does not disable future writes.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::sync::Mutex;

use crate::error::{Error, Result};
use crate::observability;

/// A destination for rendered log lines.
///
/// Implement this trait to deliver traffic records somewhere the built-in
/// console and file sinks do not reach.
///
/// # Example
///
/// ```rust
/// use std::sync::Mutex;
/// use wiretrace::LogSink;
///
/// #[derive(Default)]
/// struct MemorySink {
///     lines: Mutex<Vec<String>>,
/// }
///
/// impl LogSink for MemorySink {
///     fn write_line(&self, line: &str) {
///         self.lines.lock().unwrap().push(line.to_string());
///     }
/// }
/// ```
pub trait LogSink: Send + Sync {
    /// Deliver one rendered entry. Must not panic and must not block on
    /// anything beyond ordinary buffered I/O; failures stay inside the
    /// sink.
    fn write_line(&self, line: &str);
}

/// Sink that writes each entry to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write_line(&self, line: &str) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        let outcome = writeln!(handle, "{line}").and_then(|()| handle.flush());
        if outcome.is_err() {
            observability::CONSOLE_WRITE_ERRORS.click();
        }
    }
}

/// Sink that appends each entry to a file, one record per write.
///
/// The file is created if absent and appended to if present; reopening the
/// same path never truncates earlier records. Each entry is written and
/// flushed under the writer lock, so concurrent entries land as whole
/// records, never interleaved. Dropping the sink closes the file; nothing
/// is buffered across writes, so there is no data to lose at drop time.
#[derive(Debug)]
pub struct FileSink {
    path: String,
    writer: Mutex<BufWriter<File>>,
}

impl FileSink {
    /// Open an append-mode sink bound to `path`.
    pub fn open(path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| Error::io(format!("failed to open log file {path}"), e))?;
        observability::FILE_OPENS.click();
        Ok(Self {
            path,
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    /// The path this sink appends to.
    pub fn path(&self) -> &str {
        &self.path
    }

    fn try_write(&self, line: &str) -> Result<()> {
        let mut writer = match self.writer.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

impl LogSink for FileSink {
    fn write_line(&self, line: &str) {
        if self.try_write(line).is_err() {
            observability::FILE_WRITE_ERRORS.click();
        }
    }
}
