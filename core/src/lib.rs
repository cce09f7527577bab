//! Typed JSON convenience layer over a pluggable HTTP transport.
//!
//! # Overview
//! Wraps a `Transport` implementation with the boilerplate every JSON API
//! call repeats: compose a URL with query parameters, JSON-encode the body
//! when it needs it (injecting the matching `content-type` default),
//! execute exactly one round trip, and decode the response by content type
//! into a tagged success/error result. Status codes, headers, and the raw
//! response stay visible to the caller throughout.
//!
//! # Design
//! - `FetchClient` is stateless — it holds only the injected transport.
//! - Requests and responses cross the transport seam as owned plain data
//!   (`HttpRequest` / `HttpResponse`), so unit tests swap in a recording
//!   transport and integration tests use a real one.
//! - Non-2xx statuses are data (`FetchResult::Error`), never `Err`.
//!   Transport failures and JSON decode failures are `Err(FetchError)`.
//! - No retries, no caching, no connection management, no internal
//!   timeout; cancellation is a pass-through token the transport observes.

pub mod body;
pub mod client;
pub mod error;
pub mod http;
pub mod response;
pub mod url;

pub use body::{requires_json_encoding, FormData, FormPart, FormValue, RequestBody};
pub use client::{FetchClient, RequestOptions};
pub use error::FetchError;
pub use http::{
    HttpBody, HttpMethod, HttpRequest, HttpResponse, Transport, TransportError, TransportOptions,
};
pub use response::{shape, FetchResult};
pub use self::url::{compose, ParamValue};
