//! JSON codec for request bodies and response payloads.

use bytes::Bytes;

use crate::{Error, Result};

/// Encodes a value as UTF-8 JSON bytes, ready to ship as a request body.
///
/// # Errors
///
/// Returns [`Error::Encode`] when the value cannot be represented as JSON,
/// e.g. a map with non-string keys.
///
/// # Example
///
/// ```
/// use serde::Serialize;
/// use swallow_core::to_json;
///
/// #[derive(Serialize)]
/// struct NewPlayer<'a> {
///     name: &'a str,
/// }
///
/// let bytes = to_json(&NewPlayer { name: "Kira" }).expect("encode");
/// assert_eq!(bytes.as_ref(), br#"{"name":"Kira"}"#);
/// ```
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<Bytes> {
    serde_json::to_vec(value).map(Bytes::from).map_err(Into::into)
}

/// Decodes a JSON response body with path-aware error messages.
///
/// `serde_path_to_error` wraps the decoder so a structural mismatch names
/// the exact field that failed (e.g. `player.stats.rank`) instead of only
/// a byte offset.
///
/// # Errors
///
/// Returns [`Error::Decode`] when the text is not valid JSON or does not
/// match the shape of `T`; the path is empty for plain syntax errors.
pub fn from_json<T: serde::de::DeserializeOwned>(text: &str) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_str(text);
    serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| Error::decode(e.path().to_string(), e.inner().to_string()))
}
