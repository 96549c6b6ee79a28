//! Production transport backed by hyper-util with rustls TLS.

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;

use swallow_core::{Error, Reply, Request, Result, Transport};

use crate::config::TransportConfig;

/// [`Transport`] implementation with connection pooling and TLS.
///
/// Judges the success band itself: a completed exchange with a status
/// outside 2xx comes back as [`Error::Http`] carrying the canonical reason
/// phrase as error text, and the body is not read. Successful replies are
/// collected fully and handed over as text.
///
/// Cloning is cheap and clones share the connection pool.
#[derive(Clone)]
pub struct HyperTransport {
    inner: Client<HttpsConnector<HttpConnector>, Full<Bytes>>,
    config: TransportConfig,
}

impl std::fmt::Debug for HyperTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperTransport")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl HyperTransport {
    /// Creates a transport with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(TransportConfig::default())
    }

    /// Creates a transport with the given settings.
    #[must_use]
    pub fn with_config(config: TransportConfig) -> Self {
        let inner = Client::builder(TokioExecutor::new())
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_idle_per_host)
            .build(https_connector(&config));

        Self { inner, config }
    }

    /// The settings this transport runs with.
    #[must_use]
    pub const fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Translates an exchange description into hyper's request type.
    fn assemble(request: Request) -> Result<http::Request<Full<Bytes>>> {
        let (method, url, headers, body) = request.into_parts();

        let mut builder = http::Request::builder()
            .method(http::Method::from(method))
            .uri(url.as_str());

        for (name, value) in &headers {
            builder = builder.header(name, value);
        }

        builder
            .body(body.map_or_else(Full::default, Full::new))
            .map_err(|e| Error::invalid_request(e.to_string()))
    }

    #[allow(clippy::needless_pass_by_value)]
    fn map_send_error(err: hyper_util::client::legacy::Error) -> Error {
        let msg = err.to_string();

        if err.is_connect() {
            return Error::connection(msg);
        }

        if msg.contains("tls") || msg.contains("ssl") || msg.contains("certificate") {
            return Error::tls(msg);
        }

        Error::connection(msg)
    }
}

impl Default for HyperTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HyperTransport {
    async fn send(&self, request: Request) -> Result<Reply> {
        let assembled = Self::assemble(request)?;

        let response = tokio::time::timeout(self.config.timeout, self.inner.request(assembled))
            .await
            .map_err(|_| Error::Timeout)?
            .map_err(Self::map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            // Dropping the unread response still releases the connection.
            return Err(Error::http(status.as_u16(), reason(status)));
        }

        let bytes = response
            .into_body()
            .collect()
            .await
            .map_err(|e| Error::connection(e.to_string()))?
            .to_bytes();

        Ok(Reply::new(
            status.as_u16(),
            String::from_utf8_lossy(&bytes).into_owned(),
        ))
    }
}

/// HTTPS connector with rustls over the Mozilla root set.
///
/// Supports HTTP/1.1 and HTTP/2 over both `http` and `https` schemes, and
/// honors the configured connect deadline.
fn https_connector(config: &TransportConfig) -> HttpsConnector<HttpConnector> {
    let root_store: rustls::RootCertStore =
        webpki_roots::TLS_SERVER_ROOTS.iter().cloned().collect();

    let tls_config = rustls::ClientConfig::builder()
        .with_root_certificates(root_store)
        .with_no_client_auth();

    let mut http = HttpConnector::new();
    http.enforce_http(false);
    http.set_connect_timeout(Some(config.connect_timeout));

    HttpsConnectorBuilder::new()
        .with_tls_config(tls_config)
        .https_or_http()
        .enable_http1()
        .enable_http2()
        .wrap_connector(http)
}

/// Error text for a failed status: the canonical reason phrase when the
/// status has one.
fn reason(status: http::StatusCode) -> String {
    status
        .canonical_reason()
        .map_or_else(|| format!("HTTP status {}", status.as_u16()), str::to_owned)
}
