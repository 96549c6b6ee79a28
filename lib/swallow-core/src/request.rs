//! The request value handed to a transport.

use bytes::Bytes;
use url::Url;

use crate::{Headers, Method};

/// One HTTP exchange about to happen: method, URL, finalized headers, and
/// an optional raw body.
///
/// The client facade builds one of these per call and hands it to the
/// transport. The body, when present, is already encoded; transports never
/// touch serialization.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    url: Url,
    headers: Headers,
    body: Option<Bytes>,
}

impl Request {
    /// Creates a request with no headers and no body.
    #[must_use]
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: Headers::new(),
            body: None,
        }
    }

    /// Replaces the header set.
    #[must_use]
    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = headers;
        self
    }

    /// Attaches a raw body.
    #[must_use]
    pub fn with_body(mut self, body: Bytes) -> Self {
        self.body = Some(body);
        self
    }

    /// Request method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Request URL.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Request headers.
    #[must_use]
    pub const fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Raw request body, if any.
    #[must_use]
    pub const fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Consumes into `(method, url, headers, body)`.
    #[must_use]
    pub fn into_parts(self) -> (Method, Url, Headers, Option<Bytes>) {
        (self.method, self.url, self.headers, self.body)
    }
}
