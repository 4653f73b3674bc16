use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Minimum-severity threshold for traffic logging.
///
/// Levels are totally ordered by severity: `Trace < Debug < Error < None`.
/// An entry is emitted iff its level is at least the logger's configured
/// threshold, so `None` is a sentinel that suppresses all output. This is
/// the numeric filter, distinct from the free-text label each
/// [`LogEntry`](crate::LogEntry) carries for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LogLevel {
    /// Log every request and response.
    Trace = 0,

    /// Log requests as they are issued.
    Debug = 1,

    /// Log failed calls only.
    Error = 2,

    /// Log nothing.
    None = 3,
}

impl LogLevel {
    /// Parse a level name, case-insensitively.
    ///
    /// An unrecognized name is a normal, representable outcome, not an
    /// error.
    ///
    /// # Example
    ///
    /// ```
    /// use wiretrace::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("ERROR"), Some(LogLevel::Error));
    /// assert_eq!(LogLevel::parse("bogus"), None);
    /// ```
    pub fn parse(s: &str) -> Option<LogLevel> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "error" => Some(LogLevel::Error),
            "none" => Some(LogLevel::None),
            _ => None,
        }
    }

    /// The integer rank used for threshold comparison.
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// The lowercase level name.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Error => "error",
            LogLevel::None => "none",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for LogLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        LogLevel::parse(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("unrecognized log level: {s}")))
    }
}
