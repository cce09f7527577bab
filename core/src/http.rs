//! Transport-facing plain-data types and the transport seam.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The
//! core builds `HttpRequest` values and shapes `HttpResponse` values; the
//! single side effect per call is one `Transport::execute`. Keeping both
//! sides owned (`String`, `Vec`) lets tests substitute a recording
//! transport for the network and keeps everything else deterministic.
//!
//! Connection management, TLS, redirects, and timeouts belong to the
//! concrete transport, not to this layer.

use std::fmt;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::body::FormData;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Canonical uppercase token for the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A wire-ready request body.
///
/// `Text` carries JSON already serialized by the dispatcher. `Bytes` and
/// `Form` are exactly what the caller supplied; multipart encoding,
/// boundary included, is the transport's job.
#[derive(Debug, Clone, PartialEq)]
pub enum HttpBody {
    Text(String),
    Bytes(Vec<u8>),
    Form(FormData),
}

/// Options forwarded to the transport unmodified.
///
/// The dispatcher never inspects these. Anything else a concrete
/// transport accepts — credentials, caching, redirect policy — is
/// configured when that transport is constructed.
#[derive(Debug, Clone, Default)]
pub struct TransportOptions {
    /// Cancelling this token while the call is in flight makes the
    /// transport fail with `TransportError::Cancelled`.
    pub cancel: Option<CancellationToken>,
}

/// An HTTP request described as plain data.
///
/// Built by the dispatcher: the URL is already composed, headers merged,
/// and the body encoded. Transports execute it exactly as given.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<HttpBody>,
    pub options: TransportOptions,
}

/// An HTTP response described as plain data.
///
/// The whole value is handed back to the caller inside the shaped result,
/// so fields the shaped view does not surface (final URL, redirect flag,
/// raw body bytes) stay reachable.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
    /// Final URL after any redirects the transport followed.
    pub url: String,
    pub redirected: bool,
}

impl HttpResponse {
    /// First header with the given name, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Whether the status is in [200, 300).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failures raised by the transport itself.
///
/// These abort the call; they never appear inside a `FetchResult`.
#[derive(Debug, Clone)]
pub enum TransportError {
    /// The round trip failed (DNS, connect, TLS, I/O).
    Network(String),

    /// The caller's cancellation token fired while the call was in flight.
    Cancelled,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Network(msg) => write!(f, "network error: {msg}"),
            TransportError::Cancelled => write!(f, "request cancelled"),
        }
    }
}

impl std::error::Error for TransportError {}

/// One HTTP round trip.
///
/// Implementations return non-2xx responses as data, never as `Err`;
/// status interpretation is the shaper's job. A transport observing a
/// cancelled token fails with `TransportError::Cancelled`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}
