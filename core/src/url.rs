//! Query-string composition for request URLs.
//!
//! # Design
//! `compose` requires an absolute base URL; relative paths are rejected so
//! the transport never has to guess an origin. Parameters use set
//! semantics: setting a key replaces its first occurrence and drops any
//! later duplicates, which makes composition stable — composing again with
//! the same pairs yields the same query. Percent-encoding is delegated to
//! the `url` crate.

use std::fmt;

use url::Url;

use crate::error::FetchError;

/// A scalar query-parameter value.
///
/// Absence is expressed one level up, as `Option<ParamValue>::None`;
/// absent entries never reach the URL.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(s) => f.write_str(s),
            ParamValue::Int(n) => write!(f, "{n}"),
            ParamValue::Float(n) => write!(f, "{n}"),
            ParamValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

/// Apply `params` to `base` and return the re-serialized absolute URL.
///
/// Pairs whose value is `None` are omitted entirely. Values render with
/// their `Display` form (`true`/`false` for booleans, decimal for
/// numbers). Existing query parameters on `base` are preserved unless a
/// pair sets the same key, in which case the value is overwritten in
/// place.
///
/// # Errors
/// `FetchError::MalformedUrl` if `base` is not a valid absolute URL.
pub fn compose(
    base: &str,
    params: &[(String, Option<ParamValue>)],
) -> Result<String, FetchError> {
    let mut parsed =
        Url::parse(base).map_err(|e| FetchError::MalformedUrl(format!("{base}: {e}")))?;

    let mut pairs: Vec<(String, String)> = parsed.query_pairs().into_owned().collect();
    for (key, value) in params {
        let Some(value) = value else { continue };
        set_pair(&mut pairs, key, value.to_string());
    }

    if pairs.is_empty() {
        parsed.set_query(None);
    } else {
        parsed
            .query_pairs_mut()
            .clear()
            .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    }

    Ok(parsed.into())
}

/// Replace the first occurrence of `key` and drop later duplicates, or
/// append when the key is new.
fn set_pair(pairs: &mut Vec<(String, String)>, key: &str, value: String) {
    let first = pairs.iter().position(|(k, _)| k == key);
    pairs.retain(|(k, _)| k != key);
    match first {
        Some(i) => pairs.insert(i, (key.to_string(), value)),
        None => pairs.push((key.to_string(), value)),
    }
}
