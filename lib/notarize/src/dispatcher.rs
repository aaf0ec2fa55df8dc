//! Request dispatch: the single choke point for every remote call.
//!
//! [`Dispatcher::send`] builds the absolute URL from the configured
//! host and a relative resource path, attaches query parameters and the
//! fixed header set, transcodes and serializes an optional JSON body,
//! executes the request exactly once, and decodes the response into an
//! [`Envelope`]. It never interprets HTTP status codes; resource
//! operations own that policy per endpoint.

use std::sync::Arc;

use derive_more::{Display, From};
use serde_json::Value;
use url::Url;

use notarize_core::{Envelope, Method, Request, Result, casing, to_json};

use crate::transport::HttpTransport;

/// Header carrying the API credential.
const CREDENTIAL_HEADER: &str = "ApiKey";
/// Header carrying the SDK release version.
const CLIENT_VERSION_HEADER: &str = "X-Notarize-Client-Ver";
/// SDK release version sent on every request.
const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// A query parameter value: a string or a number serialized in its
/// decimal string form.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum QueryValue {
    /// String value, passed through as-is.
    #[display("{_0}")]
    Str(String),
    /// Signed integer, serialized in decimal form.
    #[display("{_0}")]
    Int(i64),
    /// Unsigned integer, serialized in decimal form.
    #[display("{_0}")]
    UInt(u64),
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        Self::UInt(u64::from(value))
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

/// Dispatches requests to the Notarize API.
///
/// Holds the immutable credential and base URL alongside the shared
/// transport. Cloning is cheap; concurrent calls share no mutable
/// state and need no locking.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    transport: HttpTransport,
    base_url: Url,
    api_key: Arc<str>,
}

impl Dispatcher {
    /// Create a dispatcher for the given host and credential.
    ///
    /// The host is parsed once here; a malformed host is the only
    /// input this layer ever fails hard on.
    ///
    /// # Errors
    ///
    /// Returns an error if the host does not form a valid URL.
    pub fn new(transport: HttpTransport, host: &str, api_key: impl Into<String>) -> Result<Self> {
        Ok(Self {
            transport,
            base_url: Self::parse_host(host)?,
            api_key: Arc::from(api_key.into()),
        })
    }

    /// The resolved base URL all paths are joined against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Issue a request and normalize the response into an [`Envelope`].
    ///
    /// The body, when present, is transcoded to wire naming and
    /// serialized as JSON; when absent, the request carries no body at
    /// all. The response body is parsed as JSON and transcoded to
    /// caller naming; an empty or non-JSON body yields an envelope
    /// with no payload, which is a normal path rather than an error.
    ///
    /// # Errors
    ///
    /// Returns an error only when the request cannot be built or the
    /// transport fails (connection, TLS, timeout). Non-2xx statuses
    /// are surfaced in the envelope verbatim.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&str, QueryValue)]>,
        body: Option<&Value>,
    ) -> Result<Envelope> {
        let url = self.base_url.join(path)?;

        let mut builder = Request::builder(method, url)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .header(CREDENTIAL_HEADER, &*self.api_key)
            .header(CLIENT_VERSION_HEADER, CLIENT_VERSION);

        if let Some(pairs) = query {
            builder = builder.query_pairs(
                pairs
                    .iter()
                    .map(|(name, value)| ((*name).to_owned(), value.to_string())),
            );
        }

        if let Some(body) = body {
            builder = builder.body(to_json(&casing::to_wire(body.clone()))?);
        }

        let response = self.transport.execute(builder.build()).await?;

        let payload = serde_json::from_slice::<Value>(response.body())
            .ok()
            .map(casing::to_caller);

        Ok(Envelope::new(response, payload))
    }

    /// Resolve a host string into the base URL. A scheme may be given
    /// explicitly; otherwise `https` is assumed. A trailing slash is
    /// enforced so relative paths join under the host's path segment.
    fn parse_host(host: &str) -> Result<Url> {
        let mut absolute = if host.contains("://") {
            host.to_owned()
        } else {
            format!("https://{host}")
        };
        if !absolute.ends_with('/') {
            absolute.push('/');
        }
        Ok(Url::parse(&absolute)?)
    }
}
