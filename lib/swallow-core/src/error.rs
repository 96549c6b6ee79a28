//! Failure taxonomy for swallow operations.

use derive_more::{Display, Error, From};

use crate::UNKNOWN;

// ============================================================================
// Error Type
// ============================================================================

/// Any way a call can fail before a decoded response exists.
///
/// Callers of the client facade never see this type; the facade folds each
/// variant into the response contract through [`code`](Error::code) and
/// [`text`](Error::text). Transports and the codec produce it, and `?`
/// carries it through the fallible half of a call.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// The exchange completed but the status was outside the success band.
    #[display("HTTP error {status}: {message}")]
    #[from(skip)]
    Http {
        /// Observed HTTP status code.
        status: u16,
        /// The transport's error text for this status.
        message: String,
    },

    /// Connection-level failure; no status was ever observed.
    #[display("connection error: {_0}")]
    #[from(skip)]
    Connection(#[error(not(source))] String),

    /// TLS/SSL failure.
    #[display("TLS error: {_0}")]
    #[from(skip)]
    Tls(#[error(not(source))] String),

    /// The deadline elapsed before the exchange completed.
    #[display("request timeout")]
    #[from(skip)]
    Timeout,

    /// The underlying stack refused to assemble the request, e.g. a header
    /// name it considers invalid.
    #[display("invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),

    /// The request URL did not parse.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),

    /// The request body could not be encoded as JSON.
    #[display("JSON encode error: {_0}")]
    #[from]
    Encode(serde_json::Error),

    /// The response body was not valid JSON or did not match the expected
    /// shape.
    #[display("JSON decode error at '{path}': {message}")]
    #[from(skip)]
    Decode {
        /// JSON path to the failing field; empty for plain syntax errors.
        path: String,
        /// Decoder message.
        message: String,
    },
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates an HTTP status failure.
    #[must_use]
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    /// Creates a connection failure.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Creates a TLS failure.
    #[must_use]
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Creates an invalid-request failure.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Creates a decode failure with path context.
    #[must_use]
    pub fn decode(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            path: path.into(),
            message: message.into(),
        }
    }

    /// The HTTP status, when the exchange got far enough to observe one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Contract code for this failure: the observed HTTP status, or
    /// [`UNKNOWN`] when the failure happened before any status existed.
    ///
    /// A fault mid-exchange maps to [`UNKNOWN`] as well; a half-finished
    /// exchange has not observed a status in any meaningful sense.
    #[must_use]
    pub fn code(&self) -> i32 {
        self.status().map_or(UNKNOWN, i32::from)
    }

    /// The detail that lands in the contract's `message` field.
    ///
    /// For status failures this is the transport's error text alone; the
    /// status itself already travels in [`code`](Error::code) and is not
    /// repeated here. Every other variant uses its display form.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Http { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// The lifecycle phase this failure belongs to.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        match self {
            Self::InvalidUrl(_) | Self::Encode(_) => Phase::Build,
            Self::Http { .. }
            | Self::Connection(_)
            | Self::Tls(_)
            | Self::Timeout
            | Self::InvalidRequest(_) => Phase::Send,
            Self::Decode { .. } => Phase::Decode,
        }
    }
}

// ============================================================================
// Failure Phase
// ============================================================================

/// Where in a call's lifecycle a failure happened.
///
/// Purely diagnostic. The phase is logged next to the failure so operators
/// can tell a request that never left the process from one the server
/// rejected, and both from an answer that would not decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Phase {
    /// Assembling the call: URL parsing or body encoding.
    #[display("build")]
    Build,
    /// Exchanging with the server.
    #[display("send")]
    Send,
    /// Decoding the response body.
    #[display("decode")]
    Decode,
}
