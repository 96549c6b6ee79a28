//! The client facade: typed GET and POST that never fail.

use std::time::Instant;

use bytes::Bytes;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use swallow_core::{
    ApiResponse, Headers, Method, Request, Result, Transport, from_json, to_json,
};

use crate::config::TransportConfig;
use crate::transport::HyperTransport;

/// Typed JSON-over-HTTP client.
///
/// [`get`](ApiClient::get) and [`post`](ApiClient::post) always return the
/// requested response type. There is no error branch at call sites: every
/// failure is folded into the type through the contract's failure
/// constructor, and callers branch on the decoded `code` alone. A call has
/// exactly three outcomes:
///
/// 1. The server answered outside the success band: `code` is the observed
///    HTTP status and `message` is the transport's error text.
/// 2. The call failed without a server verdict (connection fault, timeout,
///    bad URL, undecodable body): `code` is
///    [`UNKNOWN`](swallow_core::UNKNOWN) and `message` describes the
///    failure.
/// 3. The exchange succeeded and the body decoded: the decoded value is
///    returned verbatim, server-reported fields untouched.
///
/// Configuration setters consume and return the client, so a configured
/// client cannot be reconfigured while calls borrow it; build it once,
/// then share it. Calls take `&self` and may run concurrently. Call sites
/// that need a different header set build their own instance.
///
/// # Example
///
/// ```no_run
/// use swallow::{ApiClient, ApiEnvelope, UNKNOWN};
///
/// # async fn demo() {
/// let client = ApiClient::new().set_header("X-Api-Key", "secret");
///
/// let pong: ApiEnvelope = client.get("https://api.example.com/ping").await;
/// match pong.code {
///     200 => { /* use the payload */ }
///     UNKNOWN => { /* never reached the server */ }
///     _ => { /* server rejected the call */ }
/// }
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient<X = HyperTransport> {
    transport: X,
    headers: Headers,
    content_type_as_json: bool,
}

impl ApiClient<HyperTransport> {
    /// Creates a client over the default hyper transport.
    #[must_use]
    pub fn new() -> Self {
        Self::with_transport(HyperTransport::new())
    }

    /// Creates a client over a hyper transport with custom settings.
    #[must_use]
    pub fn with_config(config: TransportConfig) -> Self {
        Self::with_transport(HyperTransport::with_config(config))
    }
}

impl Default for ApiClient<HyperTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<X: Transport> ApiClient<X> {
    /// Creates a client over any transport implementation.
    #[must_use]
    pub fn with_transport(transport: X) -> Self {
        Self {
            transport,
            headers: Headers::new(),
            content_type_as_json: true,
        }
    }

    /// Adds a request header unless one with that name is already set.
    ///
    /// The first write for a name wins; setting the same name again is a
    /// no-op, so defaults registered early cannot be clobbered later. The
    /// name passes through uninterpreted, and a name the transport refuses
    /// only surfaces at call time, absorbed like any other failure.
    #[must_use]
    pub fn set_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.put_if_absent(name, value);
        self
    }

    /// Toggles automatic `Content-Type: application/json` injection.
    ///
    /// Enabled by default. The header is materialized per call and never
    /// overwrites an explicitly set content type.
    #[must_use]
    pub const fn set_content_type_as_json(mut self, enabled: bool) -> Self {
        self.content_type_as_json = enabled;
        self
    }

    /// The transport this client sends through.
    #[must_use]
    pub const fn transport(&self) -> &X {
        &self.transport
    }

    /// Issues a GET request and decodes the JSON response body into `T`.
    pub async fn get<T: ApiResponse>(&self, url: &str) -> T {
        self.perform(Method::Get, url, None).await
    }

    /// Issues a POST request carrying `body` as UTF-8 JSON and decodes the
    /// response body into `T`.
    pub async fn post<T, B>(&self, url: &str, body: &B) -> T
    where
        T: ApiResponse,
        B: Serialize + Send + Sync,
    {
        self.perform(Method::Post, url, Some(to_json(body))).await
    }

    /// Materializes the header set for one call: a copy of the configured
    /// headers, plus the JSON content type when enabled and not already
    /// present. The stored set is never touched, so repeated calls see
    /// identical headers.
    fn finalize_headers(&self) -> Headers {
        let mut headers = self.headers.clone();
        if self.content_type_as_json {
            headers.put_if_absent("Content-Type", "application/json");
        }
        headers
    }

    /// The single executor behind [`get`](Self::get) and
    /// [`post`](Self::post): runs the exchange and folds any failure into
    /// `T` through the contract's failure constructor.
    async fn perform<T: ApiResponse>(
        &self,
        method: Method,
        url: &str,
        body: Option<Result<Bytes>>,
    ) -> T {
        let started = Instant::now();
        let outcome = self.exchange::<T>(method, url, body).await;
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        match outcome {
            Ok(decoded) => {
                debug!(%method, url, code = decoded.code(), elapsed_ms, "request completed");
                decoded
            }
            Err(err) => {
                warn!(
                    %method,
                    url,
                    phase = %err.phase(),
                    error = %err,
                    elapsed_ms,
                    "request failed"
                );
                T::from_failure(err.code(), err.text())
            }
        }
    }

    /// The fallible half of a call: parse the URL, finalize headers,
    /// attach the pre-encoded body, exchange, decode.
    async fn exchange<T: ApiResponse>(
        &self,
        method: Method,
        url: &str,
        body: Option<Result<Bytes>>,
    ) -> Result<T> {
        let url = Url::parse(url)?;
        let mut request = Request::new(method, url).with_headers(self.finalize_headers());
        if let Some(encoded) = body {
            request = request.with_body(encoded?);
        }

        let reply = self.transport.send(request).await?;
        from_json(reply.body())
    }
}
