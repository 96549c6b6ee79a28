//! The transport seam the client facade is generic over.

use std::future::Future;

use crate::{Reply, Request, Result};

/// A transport able to carry out one HTTP exchange.
///
/// Production code plugs in the hyper-backed implementation from the
/// `swallow` crate; tests plug in scripted fakes. Implementations judge
/// success themselves: a completed exchange with a status outside the 2xx
/// band must come back as [`Error::Http`](crate::Error::Http) carrying the
/// observed status and the transport's error text, so the caller never has
/// to re-derive "was that a failure" from a reply.
pub trait Transport: Send + Sync {
    /// Carries out the exchange described by `request`.
    ///
    /// One attempt only; retries are a caller concern.
    ///
    /// # Errors
    ///
    /// Returns an error for anything that kept a successful reply from
    /// existing:
    /// - connection or TLS failures
    /// - timeouts
    /// - a request the underlying stack refused to assemble
    /// - a completed exchange with a non-success status
    fn send(&self, request: Request) -> impl Future<Output = Result<Reply>> + Send;
}
