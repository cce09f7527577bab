//! Request bodies and the JSON-or-passthrough classification.
//!
//! # Design
//! Bodies are a tagged enum rather than raw bytes, so classification is a
//! match instead of an inspection: JSON payloads are held as
//! `serde_json::Value` until the dispatcher serializes them, while binary
//! and multipart payloads pass through this layer untouched. The
//! classification drives two things at dispatch time: whether the body is
//! serialized to JSON text, and whether a default
//! `content-type: application/json` header is injected.

use serde::Serialize;
use serde_json::Value;

use crate::error::FetchError;

/// A request body as supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// A JSON-encodable value, serialized to text at dispatch.
    /// `Value::Null` is a JSON body like any other.
    Json(Value),

    /// An opaque binary payload, forwarded as-is.
    Bytes(Vec<u8>),

    /// A multipart form container, forwarded as-is; the transport assigns
    /// the boundary and wire encoding.
    Form(FormData),
}

impl RequestBody {
    /// Build a JSON body from any serializable value.
    ///
    /// # Errors
    /// `FetchError::Serialization` if the value cannot be represented as
    /// JSON (for example a map with non-string keys).
    pub fn json<B: Serialize>(value: &B) -> Result<Self, FetchError> {
        let value =
            serde_json::to_value(value).map_err(|e| FetchError::Serialization(e.to_string()))?;
        Ok(RequestBody::Json(value))
    }
}

impl From<Value> for RequestBody {
    fn from(value: Value) -> Self {
        RequestBody::Json(value)
    }
}

impl From<FormData> for RequestBody {
    fn from(form: FormData) -> Self {
        RequestBody::Form(form)
    }
}

impl From<Vec<u8>> for RequestBody {
    fn from(bytes: Vec<u8>) -> Self {
        RequestBody::Bytes(bytes)
    }
}

/// A multipart form described as plain data.
///
/// Parts are kept in insertion order. This layer never encodes the form;
/// transports turn it into a multipart body with their own boundary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormData {
    pub parts: Vec<FormPart>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text field.
    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.parts.push(FormPart {
            name: name.to_string(),
            value: FormValue::Text(value.to_string()),
            filename: None,
            content_type: None,
        });
        self
    }

    /// Append a file part with raw bytes.
    pub fn file(mut self, name: &str, filename: &str, content_type: &str, data: Vec<u8>) -> Self {
        self.parts.push(FormPart {
            name: name.to_string(),
            value: FormValue::Bytes(data),
            filename: Some(filename.to_string()),
            content_type: Some(content_type.to_string()),
        });
        self
    }
}

/// One entry of a multipart form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormPart {
    pub name: String,
    pub value: FormValue,
    pub filename: Option<String>,
    pub content_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormValue {
    Text(String),
    Bytes(Vec<u8>),
}

/// Whether `body` needs JSON serialization before dispatch.
///
/// Absent bodies and opaque payloads (binary, multipart form) do not;
/// everything else — objects, arrays, strings, numbers, booleans, and
/// `null` — does. A `true` here also means the dispatcher injects the
/// default `content-type: application/json` header, which caller-supplied
/// headers may override.
pub fn requires_json_encoding(body: Option<&RequestBody>) -> bool {
    match body {
        None => false,
        Some(RequestBody::Bytes(_)) | Some(RequestBody::Form(_)) => false,
        Some(RequestBody::Json(_)) => true,
    }
}
