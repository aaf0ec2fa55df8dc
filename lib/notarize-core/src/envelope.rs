//! Response envelope: raw transport response plus decoded payload.

use bytes::Bytes;
use serde_json::Value;

use crate::Response;

/// A raw transport response paired with its optional decoded payload.
///
/// The payload is the response body parsed as JSON and transcoded to
/// caller naming. It is `None` when the body was empty or not valid
/// JSON, which is a normal path (DELETE endpoints return no body on
/// success). Status interpretation is left to the caller; the envelope
/// surfaces the transport result verbatim.
#[derive(Debug, Clone)]
pub struct Envelope {
    response: Response<Bytes>,
    payload: Option<Value>,
}

impl Envelope {
    /// Pair a response with its decoded payload.
    #[must_use]
    pub fn new(response: Response<Bytes>, payload: Option<Value>) -> Self {
        Self { response, payload }
    }

    /// The raw transport response.
    #[must_use]
    pub const fn response(&self) -> &Response<Bytes> {
        &self.response
    }

    /// The decoded payload, when the body parsed as JSON.
    #[must_use]
    pub const fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }

    /// HTTP status code of the response.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.response.status()
    }

    /// Transport-level ok flag (status is 2xx).
    #[must_use]
    pub const fn ok(&self) -> bool {
        self.response.is_success()
    }

    /// Decode the payload into a typed value.
    ///
    /// Returns `None` when there is no payload or it does not match the
    /// expected shape; resource operations treat both as "no domain
    /// object extracted" rather than an error.
    #[must_use]
    pub fn decode<T: serde::de::DeserializeOwned>(&self) -> Option<T> {
        self.payload
            .as_ref()
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    /// A string field looked up at the top level of the payload.
    #[must_use]
    pub fn payload_str(&self, key: &str) -> Option<&str> {
        self.payload.as_ref()?.get(key)?.as_str()
    }

    /// The `errors` array of the payload, as strings.
    #[must_use]
    pub fn payload_errors(&self) -> Option<Vec<String>> {
        let errors = self.payload.as_ref()?.get("errors")?.as_array()?;
        Some(
            errors
                .iter()
                .filter_map(|entry| entry.as_str().map(str::to_owned))
                .collect(),
        )
    }

    /// Consume into (response, payload).
    #[must_use]
    pub fn into_parts(self) -> (Response<Bytes>, Option<Value>) {
        (self.response, self.payload)
    }
}
