//! HTTP method types.

use derive_more::Display;

/// Request method.
///
/// The facade only issues GET and POST; transports convert to their own
/// method type through [`From`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Method {
    /// GET method - fetch a resource.
    #[display("GET")]
    Get,
    /// POST method - submit a JSON payload.
    #[display("POST")]
    Post,
}

impl Method {
    /// Returns `true` when the method carries a request body.
    #[must_use]
    pub const fn has_body(&self) -> bool {
        matches!(self, Self::Post)
    }
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
        }
    }
}
