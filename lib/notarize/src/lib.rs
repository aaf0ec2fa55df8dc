//! Client SDK for the Notarize remote notarization API.
//!
//! Every remote call flows through one dispatcher that joins the
//! configured host with a resource path, transcodes JSON bodies
//! between caller naming (camelCase) and wire naming (snake_case),
//! attaches the credential headers, and normalizes the response into
//! an envelope. Resource operations (documents, transactions,
//! templates, webhooks) shape envelopes into discriminated outcomes.
//!
//! # Example
//!
//! ```no_run
//! use notarize::prelude::*;
//!
//! # async fn run() -> notarize::Result<()> {
//! let client = Notarize::new(NotarizeConfig::new("my-api-key"))?;
//!
//! let listing = client.transactions().list(None, None).await?;
//! if let Some(page) = listing.value {
//!     for transaction in page.data {
//!         println!("{} {:?}", transaction.id, transaction.status);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod dispatcher;
pub mod documents;
mod outcome;
pub mod prelude;
pub mod templates;
pub mod transactions;
mod transport;
pub mod webhooks;

// Re-export client types
pub use client::Notarize;
pub use config::{DEFAULT_HOST, NotarizeConfig, TransportConfig, TransportConfigBuilder};
pub use dispatcher::{Dispatcher, QueryValue};
pub use outcome::{DeleteAck, Outcome};
pub use transport::HttpTransport;

// Re-export core types
pub use notarize_core::{
    Envelope, Error, Method, Request, RequestBuilder, Response, Result, casing, from_json, to_json,
};

// Re-export http types for status codes and headers
pub use notarize_core::{StatusCode, header};
