//! Response shaping: decode by content type, tag by status.
//!
//! # Design
//! The decode decision depends only on the `content-type` header, and it
//! runs before the status is inspected — a malformed JSON error body fails
//! the call exactly like a malformed success body. The success/error tag
//! depends only on the status range. Keeping the two decisions independent
//! is what lets the `Error` variant carry a decoded JSON payload while
//! staying deliberately untyped.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::FetchError;
use crate::http::HttpResponse;

/// Outcome of a fetch call whose HTTP round trip completed.
///
/// The variant is derived solely from the response status: [200, 300) is
/// `Success`, everything else is `Error`. Both variants carry the decoded
/// body, the status line, the response headers, and the raw
/// `HttpResponse` for anything not surfaced here (final URL, redirect
/// flag, raw body bytes).
#[derive(Debug)]
pub enum FetchResult<T> {
    Success {
        /// Decoded JSON body, or `None` when the response was not JSON or
        /// its body was `null`.
        data: Option<T>,
        status: u16,
        status_text: String,
        headers: Vec<(String, String)>,
        response: HttpResponse,
    },
    /// Non-2xx response. `data` is deliberately untyped — error bodies
    /// have no agreed shape, so callers match on the tag before reading.
    Error {
        data: Option<Value>,
        status: u16,
        status_text: String,
        headers: Vec<(String, String)>,
        response: HttpResponse,
    },
}

impl<T> FetchResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchResult::Success { .. })
    }

    pub fn status(&self) -> u16 {
        match self {
            FetchResult::Success { status, .. } | FetchResult::Error { status, .. } => *status,
        }
    }
}

/// Shape a transport response into a `FetchResult`.
///
/// When the `content-type` header contains `application/json` the body is
/// decoded unconditionally; otherwise the decoded body is `None` and no
/// other decode is attempted.
///
/// # Errors
/// `FetchError::Deserialization` if the body is not valid JSON despite
/// the content type, or if a success body does not fit `T`.
pub fn shape<T: DeserializeOwned>(response: HttpResponse) -> Result<FetchResult<T>, FetchError> {
    let is_json = response
        .header("content-type")
        .map(|v| v.to_ascii_lowercase().contains("application/json"))
        .unwrap_or(false);

    let decoded: Option<Value> = if is_json {
        let value = serde_json::from_slice(&response.body)
            .map_err(|e| FetchError::Deserialization(e.to_string()))?;
        Some(value)
    } else {
        None
    };

    if response.is_success() {
        let data = match decoded {
            None | Some(Value::Null) => None,
            Some(value) => Some(
                serde_json::from_value(value)
                    .map_err(|e| FetchError::Deserialization(e.to_string()))?,
            ),
        };
        Ok(FetchResult::Success {
            data,
            status: response.status,
            status_text: response.status_text.clone(),
            headers: response.headers.clone(),
            response,
        })
    } else {
        Ok(FetchResult::Error {
            data: decoded,
            status: response.status,
            status_text: response.status_text.clone(),
            headers: response.headers.clone(),
            response,
        })
    }
}
