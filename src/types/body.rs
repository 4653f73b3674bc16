use bytes::Bytes;

/// A request or response body as supplied by the HTTP call path.
///
/// Callers hand the logger whatever they have on hand: already-stringified
/// payloads or raw wire bytes. Coercion to text happens before a
/// [`LogEntry`](crate::LogEntry) is constructed; byte bodies are decoded as
/// UTF-8 with invalid sequences replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// A textual body, used as-is.
    Text(String),

    /// A raw byte body, decoded as UTF-8 text.
    Bytes(Bytes),
}

impl Body {
    /// Creates a textual body.
    pub fn text(s: impl Into<String>) -> Self {
        Body::Text(s.into())
    }

    /// Creates a raw byte body.
    pub fn bytes(b: impl Into<Bytes>) -> Self {
        Body::Bytes(b.into())
    }

    /// Coerce the body to text.
    pub fn into_text(self) -> String {
        match self {
            Body::Text(s) => s,
            Body::Bytes(b) => String::from_utf8_lossy(&b).into_owned(),
        }
    }
}

impl From<String> for Body {
    fn from(s: String) -> Self {
        Body::Text(s)
    }
}

impl From<&str> for Body {
    fn from(s: &str) -> Self {
        Body::Text(s.to_string())
    }
}

impl From<Bytes> for Body {
    fn from(b: Bytes) -> Self {
        Body::Bytes(b)
    }
}

impl From<Vec<u8>> for Body {
    fn from(b: Vec<u8>) -> Self {
        Body::Bytes(Bytes::from(b))
    }
}

impl From<&[u8]> for Body {
    fn from(b: &[u8]) -> Self {
        Body::Bytes(Bytes::copy_from_slice(b))
    }
}
