//! Request dispatch and the verb facade.
//!
//! # Design
//! `FetchClient` holds only the injected transport and carries no state
//! between calls. Every verb funnels into `request`, which performs the
//! one network call per invocation: compose the URL, classify and encode
//! the body, merge headers, execute, shape. Transport failures and JSON
//! decode failures propagate as `FetchError`; non-2xx statuses come back
//! as `FetchResult::Error`. There are no retries and no internal timeout —
//! cancellation is a token in `TransportOptions` that the transport
//! observes.

use serde::de::DeserializeOwned;

use crate::body::{requires_json_encoding, RequestBody};
use crate::error::FetchError;
use crate::http::{HttpBody, HttpMethod, HttpRequest, Transport, TransportOptions};
use crate::response::{shape, FetchResult};
use crate::url::{compose, ParamValue};

/// Per-call configuration.
///
/// `params` and `body` are consumed by this layer and never forwarded
/// verbatim; `transport` passes through to the transport unmodified.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Query parameters applied to the URL. `None` values are omitted.
    pub params: Vec<(String, Option<ParamValue>)>,

    /// Extra request headers. Overrides the injected defaults on
    /// case-insensitive name collisions.
    pub headers: Vec<(String, String)>,

    /// Request body. The verb methods that take a body overwrite this.
    pub body: Option<RequestBody>,

    /// Options forwarded to the transport untouched.
    pub transport: TransportOptions,
}

/// Stateless JSON-over-HTTP client, generic over its transport.
#[derive(Debug, Clone)]
pub struct FetchClient<T: Transport> {
    transport: T,
}

impl<T: Transport> FetchClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Dispatch one request and shape the response.
    ///
    /// # Errors
    /// `FetchError::MalformedUrl` for a non-absolute URL,
    /// `FetchError::Serialization` if a JSON body cannot be encoded,
    /// `FetchError::Transport` for transport failures (including
    /// cancellation), and `FetchError::Deserialization` if the response
    /// claims JSON but does not decode. Non-2xx statuses are not errors;
    /// they return as `FetchResult::Error`.
    pub async fn request<R: DeserializeOwned>(
        &self,
        method: HttpMethod,
        url: &str,
        options: RequestOptions,
    ) -> Result<FetchResult<R>, FetchError> {
        let RequestOptions {
            params,
            headers,
            body,
            transport,
        } = options;

        let url = compose(url, &params)?;

        let mut merged = Vec::new();
        if requires_json_encoding(body.as_ref()) {
            merged.push(("content-type".to_string(), "application/json".to_string()));
        }
        merge_headers(&mut merged, headers);

        let body = match body {
            Some(RequestBody::Json(value)) => Some(HttpBody::Text(
                serde_json::to_string(&value)
                    .map_err(|e| FetchError::Serialization(e.to_string()))?,
            )),
            Some(RequestBody::Bytes(bytes)) => Some(HttpBody::Bytes(bytes)),
            Some(RequestBody::Form(form)) => Some(HttpBody::Form(form)),
            None => None,
        };

        let request = HttpRequest {
            method,
            url,
            headers: merged,
            body,
            options: transport,
        };
        let response = self.transport.execute(request).await?;
        shape(response)
    }

    pub async fn get<R: DeserializeOwned>(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> Result<FetchResult<R>, FetchError> {
        self.request(HttpMethod::Get, url, options).await
    }

    pub async fn delete<R: DeserializeOwned>(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> Result<FetchResult<R>, FetchError> {
        self.request(HttpMethod::Delete, url, options).await
    }

    pub async fn post<R: DeserializeOwned, B: Into<RequestBody>>(
        &self,
        url: &str,
        body: B,
        mut options: RequestOptions,
    ) -> Result<FetchResult<R>, FetchError> {
        options.body = Some(body.into());
        self.request(HttpMethod::Post, url, options).await
    }

    pub async fn put<R: DeserializeOwned, B: Into<RequestBody>>(
        &self,
        url: &str,
        body: B,
        mut options: RequestOptions,
    ) -> Result<FetchResult<R>, FetchError> {
        options.body = Some(body.into());
        self.request(HttpMethod::Put, url, options).await
    }

    pub async fn patch<R: DeserializeOwned, B: Into<RequestBody>>(
        &self,
        url: &str,
        body: B,
        mut options: RequestOptions,
    ) -> Result<FetchResult<R>, FetchError> {
        options.body = Some(body.into());
        self.request(HttpMethod::Patch, url, options).await
    }
}

/// Overlay `extra` onto `merged`; later entries replace earlier ones under
/// case-insensitive name equality, keeping the caller's spelling.
fn merge_headers(merged: &mut Vec<(String, String)>, extra: Vec<(String, String)>) {
    for (name, value) in extra {
        match merged
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(&name))
        {
            Some(entry) => *entry = (name, value),
            None => merged.push((name, value)),
        }
    }
}
