//! The response contract every decoded reply satisfies.
//!
//! Servers answer with a JSON object carrying a status `code`, an optional
//! machine-readable `errCode`, and an optional human-readable `message`.
//! Any type implementing [`ApiResponse`] can be the target of a client
//! call; [`ApiEnvelope`] is the ready-made implementation for endpoints
//! that return nothing beyond the contract fields.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Sentinel `code` for failures that never produced a server status.
///
/// Connection faults, timeouts, undecodable bodies, and anything else that
/// happens before or after the server spoke all report this value, so call
/// sites can tell "the server rejected it" from "we never got an answer".
pub const UNKNOWN: i32 = -1;

/// Contract implemented by every type a client call decodes into.
///
/// Successful calls produce the type by deserializing the response body;
/// failed calls produce it through [`from_failure`](Self::from_failure),
/// which is why implementors must be constructible from a bare code and
/// message with every other field at its default.
///
/// For payloads with fields beyond the contract, embed [`ApiEnvelope`]
/// with `#[serde(flatten)]` and delegate the accessors to it:
///
/// ```
/// use serde::Deserialize;
/// use swallow_core::{ApiEnvelope, ApiResponse};
///
/// #[derive(Debug, Default, Deserialize)]
/// struct Profile {
///     #[serde(flatten)]
///     envelope: ApiEnvelope,
///     #[serde(default)]
///     display_name: Option<String>,
/// }
///
/// impl ApiResponse for Profile {
///     fn code(&self) -> i32 {
///         self.envelope.code
///     }
///
///     fn err_code(&self) -> Option<&str> {
///         self.envelope.err_code.as_deref()
///     }
///
///     fn message(&self) -> Option<&str> {
///         self.envelope.message.as_deref()
///     }
///
///     fn from_failure(code: i32, message: impl Into<String>) -> Self {
///         Self {
///             envelope: ApiEnvelope::from_failure(code, message),
///             ..Self::default()
///         }
///     }
/// }
/// ```
pub trait ApiResponse: DeserializeOwned {
    /// Status code: an HTTP status reported by the server, or [`UNKNOWN`]
    /// when no status was ever observed.
    fn code(&self) -> i32;

    /// Machine-readable failure reason from the server, e.g. `"name_taken"`.
    fn err_code(&self) -> Option<&str>;

    /// Human-readable detail, for success and failure alike.
    fn message(&self) -> Option<&str>;

    /// Builds an instance describing a failure observed on the client side.
    ///
    /// Only `code` and `message` carry information; everything else takes
    /// its default. `err_code` stays empty, it belongs to the server.
    fn from_failure(code: i32, message: impl Into<String>) -> Self;
}

/// The contract fields and nothing else.
///
/// Decodes any contract-shaped body: fields the server omits fall back to
/// their defaults rather than failing the decode. Serializes without the
/// empty optionals, which keeps test fixtures and echoed payloads tidy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEnvelope {
    /// Status code reported by the server, e.g. 200, 404, 500.
    #[serde(default)]
    pub code: i32,
    /// Machine-readable failure reason, e.g. `"name_taken"` or
    /// `"quota_exceeded"`. Absent on success.
    #[serde(rename = "errCode", default, skip_serializing_if = "Option::is_none")]
    pub err_code: Option<String>,
    /// Human-readable detail for the call outcome.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiResponse for ApiEnvelope {
    fn code(&self) -> i32 {
        self.code
    }

    fn err_code(&self) -> Option<&str> {
        self.err_code.as_deref()
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn from_failure(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            err_code: None,
            message: Some(message.into()),
        }
    }
}
