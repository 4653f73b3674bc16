//! Client-side HTTP traffic logging for generated API clients.
//!
//! A [`TrafficLogger`] is embedded in an API client and records outgoing
//! requests and incoming responses at a configurable verbosity, in a
//! configurable format, to configurable sinks, redacting credentials on the
//! way out. It is a passive observer: it never alters the request/response
//! flow and never surfaces a failure to the code being logged.

// Public modules
pub mod config;
pub mod error;
pub mod logger;
pub mod observability;
pub mod sink;
pub mod types;
pub mod utils;

// Re-exports
pub use config::LoggerConfig;
pub use error::{Error, Result};
pub use logger::TrafficLogger;
pub use sink::{ConsoleSink, FileSink, LogSink};
pub use types::*;
