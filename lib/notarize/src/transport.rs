//! HTTP transport over hyper-util.

use std::collections::HashMap;
use std::time::Instant;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::{
    client::legacy::{Client, connect::HttpConnector},
    rt::TokioExecutor,
};
use tracing::{Instrument, Level, debug, info, span, warn};

use crate::{Error, Request, Response, Result, config::TransportConfig};

/// HTTP transport for the Notarize client.
///
/// Thin wrapper over the hyper-util legacy client with a rustls
/// connector. It executes each request exactly once: no retry, no
/// status-code interpretation. Cloning is cheap and clones share the
/// underlying connection pool.
#[derive(Clone)]
pub struct HttpTransport {
    inner: Client<HttpsConnector<HttpConnector>, Full<Bytes>>,
    config: TransportConfig,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl HttpTransport {
    /// Create a transport with the given configuration.
    #[must_use]
    pub fn new(config: TransportConfig) -> Self {
        let inner = Client::builder(TokioExecutor::new())
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_idle_per_host)
            .build(Self::connector());

        Self { inner, config }
    }

    /// Connector with the Mozilla roots. The Notarize API speaks
    /// HTTP/1.1 over TLS; plain HTTP stays enabled so a host override
    /// can point at a local mock server.
    fn connector() -> HttpsConnector<HttpConnector> {
        let root_store: rustls::RootCertStore =
            webpki_roots::TLS_SERVER_ROOTS.iter().cloned().collect();

        let tls_config = rustls::ClientConfig::builder()
            .with_root_certificates(root_store)
            .with_no_client_auth();

        HttpsConnectorBuilder::new()
            .with_tls_config(tls_config)
            .https_or_http()
            .enable_http1()
            .build()
    }

    /// Transport configuration.
    #[must_use]
    pub const fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Execute a request and buffer the full response.
    ///
    /// # Errors
    ///
    /// Returns an error on connection failure, TLS failure, or when the
    /// configured timeout elapses. HTTP status codes are never errors
    /// here; they are surfaced in the [`Response`] verbatim.
    pub async fn execute(&self, request: Request<Bytes>) -> Result<Response<Bytes>> {
        let method = request.method();
        let url = request.url().to_string();
        let request_span = span!(Level::INFO, "notarize_request", %method, %url);

        async move {
            let start = Instant::now();
            debug!(method = %method, url = %url, "sending request");

            let result = self.execute_inner(request).await;

            let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
            match &result {
                Ok(response) => {
                    let status = response.status();
                    if response.is_success() {
                        info!(status, elapsed_ms, "request completed");
                    } else {
                        warn!(status, elapsed_ms, "request failed with HTTP error");
                    }
                }
                Err(err) => {
                    warn!(error = %err, elapsed_ms, "request failed");
                }
            }

            result
        }
        .instrument(request_span)
        .await
    }

    async fn execute_inner(&self, request: Request<Bytes>) -> Result<Response<Bytes>> {
        let http_request = Self::build_http_request(request)?;

        let response = tokio::time::timeout(self.config.timeout, self.inner.request(http_request))
            .await
            .map_err(|_| Error::Timeout)?
            .map_err(Self::map_hyper_error)?;

        let status = response.status().as_u16();
        let response_headers = Self::extract_headers(response.headers());

        let body = response
            .into_body()
            .collect()
            .await
            .map_err(|e| Error::connection(e.to_string()))?
            .to_bytes();

        Ok(Response::new(status, response_headers, body))
    }

    /// Build a hyper request. An absent body becomes a zero-length
    /// `Full` frame with no payload written to the wire.
    fn build_http_request(request: Request<Bytes>) -> Result<http::Request<Full<Bytes>>> {
        let (method, url, headers, body) = request.into_parts();

        let mut builder = http::Request::builder()
            .method(http::Method::from(method))
            .uri(url.as_str());

        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let body = body.map_or_else(Full::default, Full::new);
        builder
            .body(body)
            .map_err(|e| Error::invalid_request(e.to_string()))
    }

    /// Extract response headers as a `HashMap`.
    fn extract_headers(headers: &http::HeaderMap) -> HashMap<String, String> {
        headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.to_string(), v.to_string()))
            })
            .collect()
    }

    #[allow(clippy::needless_pass_by_value)]
    fn map_hyper_error(err: hyper_util::client::legacy::Error) -> Error {
        let msg = err.to_string();

        if err.is_connect() {
            return Error::connection(msg);
        }

        if msg.contains("ssl") || msg.contains("tls") || msg.contains("certificate") {
            return Error::tls(msg);
        }

        Error::connection(msg)
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(TransportConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_default_config() {
        let transport = HttpTransport::default();
        assert_eq!(
            transport.config().timeout,
            std::time::Duration::from_secs(30)
        );
    }

    #[test]
    fn transport_is_clone() {
        let transport = HttpTransport::default();
        let _cloned = transport.clone();
    }

    #[test]
    fn transport_is_debug() {
        let transport = HttpTransport::default();
        let debug = format!("{transport:?}");
        assert!(debug.contains("HttpTransport"));
    }
}
