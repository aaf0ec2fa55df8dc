//! Core types for the Notarize API client.
//!
//! This crate provides the foundational types used by the `notarize` SDK:
//! - [`Method`] - HTTP method enum (the verb set the API accepts)
//! - [`Request`] and [`RequestBuilder`] - HTTP request types
//! - [`Response`] - HTTP response type
//! - [`Envelope`] - raw response paired with its decoded payload
//! - [`Error`] and [`Result`] - Error handling
//! - [`casing`] - key transcoding between caller and wire naming
//! - [`StatusCode`] - HTTP status codes (re-exported from `http` crate)
//! - [`header`] - HTTP header names (re-exported from `http` crate)

mod body;
pub mod casing;
mod envelope;
mod error;
mod method;
mod request;
mod response;

pub use body::{from_json, to_json};
pub use envelope::Envelope;
pub use error::{Error, Result};
pub use method::Method;
pub use request::{Request, RequestBuilder};
pub use response::Response;

// Re-export http crate types for status codes and headers
pub use http::{StatusCode, header};
