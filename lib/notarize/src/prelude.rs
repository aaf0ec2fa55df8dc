//! Prelude module for convenient imports.
//!
//! ```ignore
//! use notarize::prelude::*;
//! ```

pub use crate::documents::{Documents, DocumentUpdate};
pub use crate::templates::{TemplatePage, TemplateSummary, Templates};
pub use crate::transactions::{
    Document, DocumentResource, DocumentSubmission, Phone, Signer, Transaction, TransactionPage,
    TransactionRequest, TransactionUpdate, Transactions,
};
pub use crate::webhooks::{WebhookEvent, WebhookEventData, WebhookSettings, Webhooks};
pub use crate::{
    DeleteAck, Envelope, Error, Method, Notarize, NotarizeConfig, Outcome, QueryValue, Result,
    StatusCode, TransportConfig,
};
pub use serde::{Deserialize, Serialize};
