//! HTTP request building.
//!
//! Every remote call is assembled the same way: the dispatcher opens a
//! builder for the verb and resolved URL, attaches its fixed header
//! set, appends query pairs whose values are already coerced to their
//! string form, and sets a JSON body only when the operation has one.
//! An absent body is distinct from an empty one: nothing is written to
//! the wire and [`Request::body`] returns `None`.
//!
//! # Example
//!
//! ```
//! use notarize_core::{Method, Request};
//! use bytes::Bytes;
//!
//! let url = "https://api.notarize.com/v1/transactions".parse().unwrap();
//! let request = Request::<Bytes>::builder(Method::Get, url)
//!     .header("ApiKey", "my-api-key")
//!     .query_pairs([("limit".to_owned(), "10".to_owned())])
//!     .build();
//!
//! assert!(request.url().as_str().ends_with("transactions?limit=10"));
//! assert!(request.body().is_none());
//! ```

use std::collections::HashMap;

use bytes::Bytes;

use crate::Method;

/// An HTTP request with method, URL, headers, and optional body.
#[derive(Debug, Clone)]
pub struct Request<B = Bytes> {
    method: Method,
    url: url::Url,
    headers: HashMap<String, String>,
    body: Option<B>,
}

impl<B> Request<B> {
    /// Open a [`RequestBuilder`] for the given verb and URL.
    #[must_use]
    pub fn builder(method: Method, url: url::Url) -> RequestBuilder<B> {
        RequestBuilder::new(method, url)
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Request URL, query string included.
    #[must_use]
    pub fn url(&self) -> &url::Url {
        &self.url
    }

    /// Request headers.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Request body. `None` means no body was set at all, not an
    /// empty one.
    #[must_use]
    pub const fn body(&self) -> Option<&B> {
        self.body.as_ref()
    }

    /// Consume into (method, url, headers, body) for the transport.
    #[must_use]
    pub fn into_parts(self) -> (Method, url::Url, HashMap<String, String>, Option<B>) {
        (self.method, self.url, self.headers, self.body)
    }
}

/// Builder for [`Request`] instances.
#[derive(Debug, Clone)]
pub struct RequestBuilder<B = Bytes> {
    method: Method,
    url: url::Url,
    headers: HashMap<String, String>,
    body: Option<B>,
}

impl<B> RequestBuilder<B> {
    /// Start building a request for the given verb and URL.
    #[must_use]
    pub fn new(method: Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Attach a header, replacing any earlier value under the same
    /// name.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Append query parameters to the URL. Values arrive already
    /// stringified; numbers keep their decimal form.
    #[must_use]
    pub fn query_pairs(mut self, pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        {
            let mut query = self.url.query_pairs_mut();
            for (name, value) in pairs {
                query.append_pair(&name, &value);
            }
        }
        self
    }

    /// Set the request body. Leaving it unset sends no body at all.
    #[must_use]
    pub fn body(mut self, body: B) -> Self {
        self.body = Some(body);
        self
    }

    /// Build the [`Request`].
    #[must_use]
    pub fn build(self) -> Request<B> {
        Request {
            method: self.method,
            url: self.url,
            headers: self.headers,
            body: self.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn endpoint(path: &str) -> url::Url {
        url::Url::parse("https://api.notarize.com/v1/")
            .expect("base URL")
            .join(path)
            .expect("joined URL")
    }

    #[test]
    fn fixed_header_set_survives_to_the_request() {
        let request = Request::<Bytes>::builder(Method::Get, endpoint("webhooks"))
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .header("ApiKey", "test-key")
            .header("X-Notarize-Client-Ver", "0.1.0")
            .build();

        assert_eq!(request.method(), Method::Get);
        assert_eq!(request.header("ApiKey"), Some("test-key"));
        assert_eq!(request.header("X-Notarize-Client-Ver"), Some("0.1.0"));
        assert_eq!(request.headers().len(), 4);
    }

    #[test]
    fn query_pairs_keep_coerced_decimal_strings() {
        // The dispatcher coerces numeric values to strings before they
        // reach the builder; they must land in the URL unchanged.
        let pairs = [
            ("limit".to_owned(), 10.to_string()),
            ("offset".to_owned(), 0.to_string()),
        ];
        let request = Request::<Bytes>::builder(Method::Get, endpoint("transactions"))
            .query_pairs(pairs)
            .build();

        assert_eq!(
            request.url().as_str(),
            "https://api.notarize.com/v1/transactions?limit=10&offset=0"
        );
    }

    #[test]
    fn absent_body_is_not_an_empty_body() {
        let without = Request::<Bytes>::builder(Method::Delete, endpoint("documents/d-1")).build();
        assert!(without.body().is_none());

        let with_empty = Request::builder(Method::Post, endpoint("webhook_tests"))
            .body(Bytes::new())
            .build();
        assert_eq!(with_empty.body(), Some(&Bytes::new()));
    }

    #[test]
    fn wire_named_json_body_passes_through_untouched() {
        // Bodies reach the builder already transcoded and serialized.
        let body = crate::to_json(&json!({"suppress_email": true})).expect("body");
        let request = Request::builder(Method::Post, endpoint("transactions/t-1/notarization_ready"))
            .header("Content-Type", "application/json")
            .body(body)
            .build();

        assert_eq!(
            request.body().map(|body| &body[..]),
            Some(&br#"{"suppress_email":true}"#[..])
        );
    }

    #[test]
    fn into_parts_hands_everything_to_the_transport() {
        let request = Request::builder(Method::Put, endpoint("documents/d-1"))
            .header("ApiKey", "test-key")
            .body(Bytes::from_static(b"{}"))
            .build();

        let (method, url, headers, body) = request.into_parts();
        assert_eq!(method, Method::Put);
        assert!(url.as_str().ends_with("documents/d-1"));
        assert_eq!(headers.get("ApiKey").map(String::as_str), Some("test-key"));
        assert_eq!(body, Some(Bytes::from_static(b"{}")));
    }
}
