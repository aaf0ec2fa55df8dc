//! HTTP response handling.
//!
//! [`Response`] carries what the transport received, untouched: the
//! status code, headers, and raw body bytes. Whether a status means
//! "not found" or "validation failed" is decided per endpoint by the
//! resource operations; this layer only answers which family the
//! status falls in and decodes the body on request.

use std::collections::HashMap;

use bytes::Bytes;

/// HTTP response with status, headers, and body.
#[derive(Debug, Clone)]
pub struct Response<B = Bytes> {
    status: u16,
    headers: HashMap<String, String>,
    body: B,
}

impl<B> Response<B> {
    /// Assemble a response from its transport-level pieces.
    #[must_use]
    pub fn new(status: u16, headers: HashMap<String, String>, body: B) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// HTTP status code, verbatim.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Raw response body.
    #[must_use]
    pub const fn body(&self) -> &B {
        &self.body
    }

    /// Consume into the body.
    #[must_use]
    pub fn into_body(self) -> B {
        self.body
    }

    /// `true` when the status is 2xx (the envelope's ok flag).
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// `true` when the status is 4xx.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status >= 400 && self.status < 500
    }

    /// `true` when the status is 5xx.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status >= 500 && self.status < 600
    }
}

impl Response<Bytes> {
    /// Deserialize the raw body as JSON.
    ///
    /// Note the raw body still carries wire naming at this layer; the
    /// dispatcher transcodes before anything caller-facing sees it.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails.
    pub fn json<T: serde::de::DeserializeOwned>(self) -> crate::Result<T> {
        crate::from_json(&self.body)
    }

    /// The raw body as text, for non-JSON error pages.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not valid UTF-8.
    pub fn text(self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &'static [u8]) -> Response<Bytes> {
        Response::new(status, HashMap::new(), Bytes::from_static(body))
    }

    #[test]
    fn status_families() {
        assert!(response(200, b"").is_success());
        assert!(response(204, b"").is_success());

        let not_found = response(404, b"");
        assert!(not_found.is_client_error());
        assert!(!not_found.is_success());
        assert_eq!(not_found.status(), 404);

        let unavailable = response(503, b"");
        assert!(unavailable.is_server_error());
        assert!(!unavailable.is_client_error());
    }

    #[test]
    fn header_lookup() {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_owned(), "application/json".to_owned());
        let response = Response::new(200, headers, Bytes::new());

        assert_eq!(response.header("Content-Type"), Some("application/json"));
        assert_eq!(response.header("X-Request-Id"), None);
    }

    #[test]
    fn json_decodes_wire_named_body() {
        #[derive(Debug, serde::Deserialize)]
        struct Page {
            total_count: u64,
        }

        let page: Page = response(200, br#"{"total_count":3,"templates":[]}"#)
            .json()
            .expect("decode");
        assert_eq!(page.total_count, 3);
    }

    #[test]
    fn text_for_non_json_bodies() {
        let body = response(500, b"Internal Server Error")
            .text()
            .expect("utf-8 body");
        assert_eq!(body, "Internal Server Error");
    }
}
