use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::Result;
use crate::types::LogFormat;
use crate::utils::time::format_rfc3339;

/// Header map attached to a logged request or response.
///
/// Keys are case-sensitive as supplied; rendering emits one line per entry
/// in map iteration order.
pub type Headers = BTreeMap<String, String>;

/// The response header that carries the correlation id.
pub const CORRELATION_ID_HEADER: &str = "ININ-Correlation-Id";

/// The value substituted for the `Authorization` request header.
pub const REDACTED: &str = "[REDACTED]";

const AUTHORIZATION_HEADER: &str = "Authorization";

/// An immutable snapshot of one logged request/response event.
///
/// Entries are constructed fresh per call by the
/// [`TrafficLogger`](crate::TrafficLogger) entry points and never mutated
/// afterward; [`render`](LogEntry::render) works on a copy, so an entry can
/// be rendered repeatedly under different formats and body flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// The instant the entry was captured.
    #[serde(with = "crate::utils::time")]
    pub timestamp: OffsetDateTime,

    /// Free-text severity label ("trace", "debug", "error").
    ///
    /// Distinct from the numeric [`LogLevel`](crate::LogLevel) used for
    /// filtering.
    pub level: String,

    /// HTTP method of the logged call.
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub method: String,

    /// Full request URL.
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub url: String,

    /// Request headers as supplied by the caller.
    #[serde(skip_serializing_if = "Headers::is_empty", default)]
    pub request_headers: Headers,

    /// Response headers, absent for request-only entries.
    #[serde(skip_serializing_if = "headers_absent", default)]
    pub response_headers: Option<Headers>,

    /// Correlation id derived from the response headers at construction.
    #[serde(skip_serializing_if = "String::is_empty", default)]
    correlation_id: String,

    /// HTTP status code, 0 when not yet known.
    pub status_code: u16,

    /// Request body text, if captured.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub request_body: Option<String>,

    /// Response body text, if captured.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub response_body: Option<String>,
}

fn headers_absent(headers: &Option<Headers>) -> bool {
    headers.as_ref().is_none_or(Headers::is_empty)
}

impl LogEntry {
    /// Creates a new entry.
    ///
    /// The correlation id is derived here, from the original response
    /// headers' `ININ-Correlation-Id` value, defaulting to an empty string
    /// when the header or the header map is absent. It is never supplied by
    /// the caller.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        timestamp: OffsetDateTime,
        level: impl Into<String>,
        method: impl Into<String>,
        url: impl Into<String>,
        request_headers: Headers,
        response_headers: Option<Headers>,
        status_code: u16,
        request_body: Option<String>,
        response_body: Option<String>,
    ) -> Self {
        let correlation_id = response_headers
            .as_ref()
            .and_then(|headers| headers.get(CORRELATION_ID_HEADER))
            .cloned()
            .unwrap_or_default();
        Self {
            timestamp,
            level: level.into(),
            method: method.into(),
            url: url.into(),
            request_headers,
            response_headers,
            correlation_id,
            status_code,
            request_body,
            response_body,
        }
    }

    /// The correlation id extracted at construction, empty when the
    /// response carried none.
    pub fn correlation_id(&self) -> &str {
        &self.correlation_id
    }

    /// Render the entry in the given format.
    ///
    /// Rendering works on a copy of the entry: the value of a
    /// `Authorization` request header is replaced by `[REDACTED]` (no header
    /// is added when the key is absent), and bodies excluded by the flags
    /// are dropped entirely rather than emitted empty. Response headers are
    /// never altered. The entry itself, and therefore any header map the
    /// caller still holds, is left untouched.
    pub fn render(
        &self,
        format: LogFormat,
        include_request_body: bool,
        include_response_body: bool,
    ) -> Result<String> {
        let mut entry = self.clone();
        if let Some(value) = entry.request_headers.get_mut(AUTHORIZATION_HEADER) {
            *value = REDACTED.to_string();
        }
        if !include_request_body {
            entry.request_body = None;
        }
        if !include_response_body {
            entry.response_body = None;
        }
        match format {
            LogFormat::Json => Ok(serde_json::to_string(&entry)?),
            LogFormat::Text => Ok(entry.to_text()),
        }
    }

    fn to_text(&self) -> String {
        let mut out = format!(
            "{}: {}",
            self.level.to_uppercase(),
            format_rfc3339(&self.timestamp)
        );
        out.push_str("\n=== REQUEST ===");
        push_field(&mut out, "URL", &self.url);
        push_field(&mut out, "Method", &self.method);
        push_headers(&mut out, Some(&self.request_headers));
        if let Some(body) = &self.request_body {
            push_field(&mut out, "Body", body);
        }
        out.push_str("\n=== RESPONSE ===");
        push_field(&mut out, "Status", &self.status_code.to_string());
        push_headers(&mut out, self.response_headers.as_ref());
        push_field(&mut out, "CorrelationId", &self.correlation_id);
        if let Some(body) = &self.response_body {
            push_field(&mut out, "Body", body);
        }
        out
    }
}

fn push_field(out: &mut String, name: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    out.push('\n');
    out.push_str(name);
    out.push_str(": ");
    out.push_str(value);
}

fn push_headers(out: &mut String, headers: Option<&Headers>) {
    let Some(headers) = headers else {
        return;
    };
    if headers.is_empty() {
        return;
    }
    out.push_str("\nHeaders:");
    for (name, value) in headers {
        out.push('\n');
        out.push('\t');
        out.push_str(name);
        out.push_str(": ");
        out.push_str(value);
    }
}
