//! The traffic logging facade embedded in an API client.
//!
//! A [`TrafficLogger`] is constructed and owned by the client that uses it;
//! there is no process-wide instance, so two clients in one process can log
//! independently. The HTTP call path invokes [`trace`](TrafficLogger::trace),
//! [`debug`](TrafficLogger::debug), and [`error`](TrafficLogger::error);
//! each builds a [`LogEntry`], filters it against the configured minimum
//! level, renders it once, and fans the rendered line out to the configured
//! sinks. Nothing in this path escapes to the caller: every failure is
//! absorbed here or in the sinks.
//!
//! Reconfiguration takes `&mut self` and is meant to happen before
//! steady-state traffic begins; the logging entry points take `&self` and
//! are safe to call from concurrent request paths.

use std::sync::Arc;

use time::OffsetDateTime;

use crate::config::LoggerConfig;
use crate::observability;
use crate::sink::{ConsoleSink, FileSink, LogSink};
use crate::types::{Body, Headers, LogEntry, LogFormat, LogLevel};

/// Records outgoing requests and incoming responses for one API client.
pub struct TrafficLogger {
    log_file_path: Option<String>,
    file_sink: Option<FileSink>,
    console: ConsoleSink,
    log_to_console: bool,
    format: LogFormat,
    level: LogLevel,
    log_request_body: bool,
    log_response_body: bool,
    extra_sinks: Vec<Arc<dyn LogSink>>,
}

impl TrafficLogger {
    /// Create a logger from a configuration.
    ///
    /// A configured file path is opened here, append-mode; an open failure
    /// is swallowed and the logger starts without a file sink.
    pub fn new(config: LoggerConfig) -> Self {
        let mut logger = Self {
            log_file_path: None,
            file_sink: None,
            console: ConsoleSink,
            log_to_console: config.log_to_console,
            format: config.format,
            level: config.level,
            log_request_body: config.log_request_body,
            log_response_body: config.log_response_body,
            extra_sinks: Vec::new(),
        };
        if let Some(path) = config.log_file_path {
            logger.set_log_file_path(path);
        }
        logger
    }

    /// The path of the currently open file sink, if any.
    pub fn log_file_path(&self) -> Option<&str> {
        self.log_file_path.as_deref()
    }

    /// Bind the file sink to `path`, opening it append-mode.
    ///
    /// An empty path is a no-op: the previous sink, if any, stays open. A
    /// failed open is swallowed, leaving the logger without a file sink.
    /// Reopening an existing path appends; earlier records survive.
    pub fn set_log_file_path(&mut self, path: impl Into<String>) {
        let path = path.into();
        if path.is_empty() {
            return;
        }
        match FileSink::open(&path) {
            Ok(sink) => {
                self.log_file_path = Some(path);
                self.file_sink = Some(sink);
            }
            Err(_) => {
                observability::FILE_OPEN_ERRORS.click();
                self.log_file_path = None;
                self.file_sink = None;
            }
        }
    }

    /// Whether rendered entries are echoed to standard output.
    pub fn log_to_console(&self) -> bool {
        self.log_to_console
    }

    /// Sets whether rendered entries are echoed to standard output.
    pub fn set_log_to_console(&mut self, log_to_console: bool) {
        self.log_to_console = log_to_console;
    }

    /// The rendering format for subsequent entries.
    pub fn format(&self) -> LogFormat {
        self.format
    }

    /// Sets the rendering format for subsequent entries.
    pub fn set_format(&mut self, format: LogFormat) {
        self.format = format;
    }

    /// The minimum level an entry must reach to be emitted.
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Sets the minimum level.
    pub fn set_level(&mut self, level: LogLevel) {
        self.level = level;
    }

    /// Whether rendered entries include the request body.
    pub fn log_request_body(&self) -> bool {
        self.log_request_body
    }

    /// Sets whether rendered entries include the request body.
    pub fn set_log_request_body(&mut self, log_request_body: bool) {
        self.log_request_body = log_request_body;
    }

    /// Whether rendered entries include the response body.
    pub fn log_response_body(&self) -> bool {
        self.log_response_body
    }

    /// Sets whether rendered entries include the response body.
    pub fn set_log_response_body(&mut self, log_response_body: bool) {
        self.log_response_body = log_response_body;
    }

    /// Add a sink to the fan-out set, alongside the console and file sinks.
    pub fn add_sink(&mut self, sink: Arc<dyn LogSink>) {
        self.extra_sinks.push(sink);
    }

    /// Record a completed round trip at trace level.
    pub fn trace(
        &self,
        method: &str,
        url: &str,
        request_body: Option<Body>,
        status_code: u16,
        request_headers: &Headers,
        response_headers: &Headers,
    ) {
        let entry = LogEntry::new(
            OffsetDateTime::now_utc(),
            "trace",
            method,
            url,
            request_headers.clone(),
            Some(response_headers.clone()),
            status_code,
            request_body.map(Body::into_text),
            None,
        );
        self.log(LogLevel::Trace, entry);
    }

    /// Record an outgoing request at debug level.
    ///
    /// Debug entries carry no response headers: they are captured in the
    /// request phase, before any response (and thus any correlation id)
    /// exists. Use [`trace`](TrafficLogger::trace) or
    /// [`error`](TrafficLogger::error) for the response side.
    pub fn debug(
        &self,
        method: &str,
        url: &str,
        request_body: Option<Body>,
        status_code: u16,
        request_headers: &Headers,
    ) {
        let entry = LogEntry::new(
            OffsetDateTime::now_utc(),
            "debug",
            method,
            url,
            request_headers.clone(),
            None,
            status_code,
            request_body.map(Body::into_text),
            None,
        );
        self.log(LogLevel::Debug, entry);
    }

    /// Record a failed round trip at error level.
    #[allow(clippy::too_many_arguments)]
    pub fn error(
        &self,
        method: &str,
        url: &str,
        request_body: Option<Body>,
        response_body: Option<Body>,
        status_code: u16,
        request_headers: &Headers,
        response_headers: &Headers,
    ) {
        let entry = LogEntry::new(
            OffsetDateTime::now_utc(),
            "error",
            method,
            url,
            request_headers.clone(),
            Some(response_headers.clone()),
            status_code,
            request_body.map(Body::into_text),
            response_body.map(Body::into_text),
        );
        self.log(LogLevel::Error, entry);
    }

    fn log(&self, level: LogLevel, entry: LogEntry) {
        if level < self.level {
            observability::LOG_SUPPRESSED.click();
            return;
        }
        let line = match entry.render(self.format, self.log_request_body, self.log_response_body) {
            Ok(line) => line,
            Err(_) => {
                observability::RENDER_ERRORS.click();
                return;
            }
        };
        observability::LOG_ENTRIES.click();
        if self.log_to_console {
            self.console.write_line(&line);
        }
        if let Some(sink) = &self.file_sink {
            sink.write_line(&line);
        }
        for sink in &self.extra_sinks {
            sink.write_line(&line);
        }
    }
}

impl Default for TrafficLogger {
    fn default() -> Self {
        Self::new(LoggerConfig::default())
    }
}
