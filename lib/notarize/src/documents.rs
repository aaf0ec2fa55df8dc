//! Document operations.

use serde::Serialize;

use notarize_core::Method;

use crate::dispatcher::{Dispatcher, QueryValue};
use crate::outcome::{DeleteAck, Outcome};
use crate::transactions::Document;

/// Payload for [`Documents::update`]. Only set fields are sent, and
/// the service accepts them only while the owning transaction is in
/// draft.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct DocumentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_can_annotate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notarization_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_confirmation_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub witness_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_header: Option<String>,
}

/// Document operations.
#[derive(Debug, Clone, Copy)]
pub struct Documents<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> Documents<'a> {
    pub(crate) const fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Retrieve a document on a transaction, with its contents Base64
    /// encoded in the `data` field.
    ///
    /// # Errors
    ///
    /// Returns an error only on transport failure.
    pub async fn retrieve(
        &self,
        transaction_id: &str,
        document_id: &str,
    ) -> notarize_core::Result<Outcome<Document>> {
        let path = format!("transactions/{transaction_id}/documents/{document_id}");
        let query = [("encoding", QueryValue::from("base64"))];
        let envelope = self
            .dispatcher
            .send(Method::Get, &path, Some(&query), None)
            .await?;
        if envelope.status() == 404 {
            return Ok(Outcome::with_errors(envelope.ok(), envelope.payload_errors()));
        }
        Ok(Outcome::with_value(envelope.ok(), envelope.decode()))
    }

    /// Update a document while its transaction is still in draft.
    ///
    /// There is no way to know the draft state up front; a 422 from
    /// the service carries the validation `errors` array.
    ///
    /// # Errors
    ///
    /// Returns an error only on transport failure.
    pub async fn update(
        &self,
        id: &str,
        update: &DocumentUpdate,
    ) -> notarize_core::Result<Outcome<Document>> {
        let body = serde_json::to_value(update)?;
        let envelope = self
            .dispatcher
            .send(Method::Put, &format!("documents/{id}"), None, Some(&body))
            .await?;
        if envelope.status() == 422 {
            return Ok(Outcome::with_errors(envelope.ok(), envelope.payload_errors()));
        }
        Ok(Outcome::with_value(envelope.ok(), envelope.decode()))
    }

    /// Permanently delete a document.
    ///
    /// # Errors
    ///
    /// Returns an error only on transport failure.
    pub async fn delete(&self, id: &str) -> notarize_core::Result<Outcome<DeleteAck>> {
        let envelope = self
            .dispatcher
            .send(Method::Delete, &format!("documents/{id}"), None, None)
            .await?;
        if envelope.status() == 404 {
            return Ok(Outcome::with_error(
                envelope.ok(),
                "The indicated document does not exist",
            ));
        }
        Ok(Outcome::with_value(envelope.ok(), envelope.decode()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_serializes_caller_naming_and_skips_unset() {
        let update = DocumentUpdate {
            name: Some("deed.pdf".to_owned()),
            notarization_required: Some(true),
            ..DocumentUpdate::default()
        };

        let value = serde_json::to_value(&update).expect("serialize");
        assert_eq!(value["name"], "deed.pdf");
        assert_eq!(value["notarizationRequired"], true);
        assert!(value.get("trackingId").is_none());
        assert!(value.get("witnessRequired").is_none());
    }
}
