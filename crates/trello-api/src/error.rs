//! Error types for the Trello API client.

use thiserror::Error;

/// Result type used by every client operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when interacting with the Trello API.
///
/// Every operation resolves to exactly one of these kinds. Neither is retried.
#[derive(Debug, Error)]
pub enum Error {
    /// The transport did not deliver a usable body.
    ///
    /// Covers connection failures, timeouts, body read failures and non-2xx
    /// statuses.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A body was received but did not have the expected shape.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl Error {
    /// Returns true if this is a transport failure.
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Network(_))
    }

    /// Returns true if this is a decode failure.
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode(_))
    }

    /// Returns the HTTP status code if the server answered with an error status.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Network(e) => e.status().map(|s| s.as_u16()),
            Error::Decode(_) => None,
        }
    }
}

/// A JSON payload could not be mapped onto the target record.
#[derive(Debug, Error)]
#[error("failed to decode {target} at `{path}`: {source}")]
pub struct DecodeError {
    target: &'static str,
    path: String,
    #[source]
    source: serde_json::Error,
}

impl DecodeError {
    pub(crate) fn new(target: &'static str, path: impl Into<String>, source: serde_json::Error) -> Self {
        Self {
            target,
            path: path.into(),
            source,
        }
    }

    /// Builds a decode error from a path-tracking deserializer failure.
    pub(crate) fn from_path_error(
        target: &'static str,
        err: serde_path_to_error::Error<serde_json::Error>,
    ) -> Self {
        let path = err.path().to_string();
        Self::new(target, path, err.into_inner())
    }

    /// The kind of record that was being decoded (e.g. "board", "card").
    pub fn target(&self) -> &'static str {
        self.target
    }

    /// Where in the payload decoding stopped, e.g. `name` or `cards[0].id`.
    ///
    /// `.` is the payload root. For a missing field this is the object that
    /// lacked it.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The offending field: the mismatched value's path, or the path of the
    /// absent required field. `None` when the failure was not field-specific.
    pub fn field(&self) -> Option<String> {
        match (self.missing_field(), self.path.as_str()) {
            (Some(name), ".") => Some(name),
            (Some(name), parent) => Some(format!("{parent}.{name}")),
            (None, ".") => None,
            (None, path) => Some(path.to_string()),
        }
    }

    /// The name of the required field that was absent, if that caused the failure.
    pub fn missing_field(&self) -> Option<String> {
        let message = self.source.to_string();
        let rest = message.strip_prefix("missing field `")?;
        let end = rest.find('`')?;
        Some(rest[..end].to_string())
    }

    /// Returns true if the body was not valid JSON at all.
    pub fn is_syntax(&self) -> bool {
        self.source.is_syntax() || self.source.is_eof()
    }

    /// The underlying serde_json error.
    pub fn inner(&self) -> &serde_json::Error {
        &self.source
    }
}
