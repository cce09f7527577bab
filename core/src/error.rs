//! Error types for the fetch layer.
//!
//! # Design
//! Only failures that abort a call live here: a URL that does not parse,
//! a body that cannot be JSON-encoded, a transport failure, or a response
//! body that cannot be decoded despite a JSON content type. Non-2xx
//! statuses are not errors in this sense — they return normally as the
//! `Error` variant of `FetchResult`, mirroring the transport's own
//! non-throwing convention for status codes.

use std::fmt;

use crate::http::TransportError;

/// Errors that abort a fetch call before it can yield a `FetchResult`.
#[derive(Debug)]
pub enum FetchError {
    /// The request URL did not parse as an absolute URL. Relative paths
    /// are rejected deliberately; the composer never guesses an origin.
    MalformedUrl(String),

    /// The request body could not be serialized to JSON text.
    Serialization(String),

    /// The response declared `application/json` but its body could not be
    /// decoded, or the decoded value did not fit the expected type.
    Deserialization(String),

    /// The transport failed outright (network failure or cancellation).
    Transport(TransportError),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::MalformedUrl(url) => write!(f, "malformed URL: {url}"),
            FetchError::Serialization(msg) => {
                write!(f, "serialization failed: {msg}")
            }
            FetchError::Deserialization(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            FetchError::Transport(err) => write!(f, "transport failed: {err}"),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<TransportError> for FetchError {
    fn from(err: TransportError) -> Self {
        FetchError::Transport(err)
    }
}
