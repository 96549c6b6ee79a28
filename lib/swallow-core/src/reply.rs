//! What a transport hands back for an exchange it judged successful.

/// Status and body text of a successful exchange.
///
/// Only exchanges inside the success band become a `Reply`; everything
/// else surfaces as [`Error`](crate::Error) so the status and error text
/// stay attached to the failure. The body is carried as text because the
/// sole consumer is the JSON decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    status: u16,
    body: String,
}

impl Reply {
    /// Creates a reply from a status code and the raw body text.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// HTTP status code of the exchange.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Raw response body as text.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Consumes the reply, returning the body text.
    #[must_use]
    pub fn into_body(self) -> String {
        self.body
    }
}
