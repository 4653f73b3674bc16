// Public modules
pub mod body;
pub mod log_entry;
pub mod log_format;
pub mod log_level;

// Re-exports
pub use body::Body;
pub use log_entry::{CORRELATION_ID_HEADER, Headers, LogEntry, REDACTED};
pub use log_format::LogFormat;
pub use log_level::LogLevel;
