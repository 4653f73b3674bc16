//! Configuration for the traffic logger.
//!
//! This module provides the [`LoggerConfig`] struct consumed by
//! [`TrafficLogger::new`](crate::TrafficLogger::new). Generated clients
//! typically populate it from the logging section of their configuration
//! file; [`LoggerConfig::from_yaml_str`] covers that path directly.

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::types::{LogFormat, LogLevel};

/// Configuration for a [`TrafficLogger`](crate::TrafficLogger).
///
/// Every field can also be changed after construction through the logger's
/// setters; this struct is the initial state.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Path of the append-only log file. `None` (or an empty string) means
    /// no file sink.
    pub log_file_path: Option<String>,

    /// Whether rendered entries are echoed to standard output.
    pub log_to_console: bool,

    /// Rendering format for all entries.
    pub format: LogFormat,

    /// Minimum level an entry must reach to be emitted.
    ///
    /// Defaults to [`LogLevel::None`]: logging is fully disabled until
    /// explicitly configured.
    pub level: LogLevel,

    /// Whether rendered entries include the request body.
    pub log_request_body: bool,

    /// Whether rendered entries include the response body.
    pub log_response_body: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_file_path: None,
            log_to_console: true,
            format: LogFormat::Text,
            level: LogLevel::None,
            log_request_body: false,
            log_response_body: false,
        }
    }
}

impl LoggerConfig {
    /// Creates a configuration with default values.
    ///
    /// Defaults:
    /// - No file sink
    /// - Console: enabled
    /// - Format: text
    /// - Level: none (fully disabled)
    /// - Bodies: excluded
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the log file path.
    pub fn with_log_file_path(mut self, path: impl Into<String>) -> Self {
        self.log_file_path = Some(path.into());
        self
    }

    /// Sets whether entries are echoed to standard output.
    pub fn with_log_to_console(mut self, log_to_console: bool) -> Self {
        self.log_to_console = log_to_console;
        self
    }

    /// Sets the rendering format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the minimum level.
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Sets whether rendered entries include the request body.
    pub fn with_log_request_body(mut self, log_request_body: bool) -> Self {
        self.log_request_body = log_request_body;
        self
    }

    /// Sets whether rendered entries include the response body.
    pub fn with_log_response_body(mut self, log_response_body: bool) -> Self {
        self.log_response_body = log_response_body;
        self
    }

    /// Parse a configuration from YAML.
    ///
    /// Missing fields take their defaults; level and format names are
    /// case-insensitive. Unrecognized names are a parse error, left to the
    /// embedding client to handle before any logger exists.
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        serde_yaml::from_str(s)
            .map_err(|e| Error::serialization(format!("YAML error: {e}"), Some(Box::new(e))))
    }
}
