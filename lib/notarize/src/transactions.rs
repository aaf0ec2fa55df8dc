//! Transaction operations and the domain models shared across resources.
//!
//! A transaction is the unit of notarization work: documents, signers,
//! and the workflow state the service tracks for them. Inputs use
//! caller naming (camelCase); the dispatcher transcodes to the wire.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::json;

use notarize_core::Method;

use crate::dispatcher::{Dispatcher, QueryValue};
use crate::outcome::{DeleteAck, Outcome};

/// Default page size for [`Transactions::list`].
const DEFAULT_LIST_LIMIT: u32 = 10;

// ============================================================================
// Request models
// ============================================================================

/// A phone number split into country code and national number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phone {
    /// Country calling code, e.g. `"1"`.
    pub country_code: String,
    /// National number.
    pub number: String,
}

/// A postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// A signer attached to a transaction at creation or update time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct Signer {
    /// Email the signing invitation is sent to.
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Vec<Phone>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<String>,
}

/// Placement of a signature, initial, or annotation on a document page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct SigningDestination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signer_identifier: Option<String>,
    /// Destination kind, e.g. `"signature"`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Width expression, as the service accepts it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

/// Document contents handed to the service.
///
/// The service accepts Base64 text or a URL it can fetch; raw bytes
/// are Base64-encoded at serialization time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentResource {
    /// Base64 payload or a URL the service can fetch.
    Text(String),
    /// Raw document bytes, Base64-encoded on submission.
    Bytes(Vec<u8>),
}

impl Serialize for DocumentResource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(text) => serializer.serialize_str(text),
            Self::Bytes(bytes) => serializer.serialize_str(&BASE64.encode(bytes)),
        }
    }
}

/// A document submitted with a transaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct DocumentSubmission {
    /// Document contents.
    pub resource: DocumentResource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_can_annotate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub witness_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_bookmarked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_tag_syntax: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_destinations: Option<Vec<SigningDestination>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_header: Option<String>,
}

impl DocumentSubmission {
    /// Submission with just the contents set.
    #[must_use]
    pub const fn new(resource: DocumentResource) -> Self {
        Self {
            resource,
            filename: None,
            requirement: None,
            customer_can_annotate: None,
            witness_required: None,
            pdf_bookmarked: None,
            tracking_id: None,
            text_tag_syntax: None,
            signing_destinations: None,
            authorization_header: None,
        }
    }
}

/// Free-form note shown to the notary during the meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct NotaryInstruction {
    pub notary_note: String,
}

/// Payload for [`Transactions::create`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct TransactionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents: Option<Vec<DocumentSubmission>>,
    /// At least one signer is required by the service.
    pub signers: Vec<Signer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppress_email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_to_signer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_signature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_new_signer_verification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_secondary_photo_id: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notary_instructions: Option<Vec<NotaryInstruction>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer: Option<String>,
}

/// Payload for [`Transactions::update`]. Only set fields are sent, and
/// the service accepts them only while the transaction is in draft.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct TransactionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signers: Option<Vec<Signer>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppress_email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_to_signer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_signature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_secondary_photo_id: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notary_instructions: Option<Vec<NotaryInstruction>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_signer_annotations: Option<bool>,
}

// ============================================================================
// Response models
// ============================================================================

/// Signer details as the service reports them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct SignerInfo {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub dob: Option<String>,
    pub address: Option<Address>,
    pub transaction_access_link: Option<String>,
}

/// Street address of the notarization, as the service reports it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct StreetAddress {
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub full_address: Option<String>,
}

/// A document attached to a transaction.
///
/// When retrieved with `encoding=base64`, `data` carries the Base64
/// contents.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct Document {
    pub id: String,
    pub date_created: Option<String>,
    pub date_updated: Option<String>,
    pub document_name: Option<String>,
    pub allowed_actions: Option<Vec<String>>,
    pub requirement: Option<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
    pub bundle_position: Option<u32>,
    pub is_enote: Option<bool>,
    pub tracking_id: Option<String>,
    pub signed_url: Option<String>,
    pub processing_state: Option<String>,
    pub processing_error: Option<String>,
    #[serde(default)]
    pub signing_destinations: Vec<SigningDestination>,
    pub signing_type: Option<String>,
    pub data: Option<String>,
}

/// A notarization transaction.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct Transaction {
    pub id: String,
    pub date_created: Option<String>,
    pub date_updated: Option<String>,
    pub transaction_name: Option<String>,
    pub external_id: Option<String>,
    pub transaction_type: Option<String>,
    pub require_secondary_photo_id: Option<bool>,
    pub file_number: Option<String>,
    #[serde(default)]
    pub documents: Vec<Document>,
    pub signer_info: Option<SignerInfo>,
    pub cosigner_info: Option<SignerInfo>,
    pub street_address: Option<StreetAddress>,
    pub status: Option<String>,
    pub notarization_record: Option<String>,
    pub message_to_signer: Option<String>,
    pub message_signature: Option<String>,
    pub detailed_status: Option<String>,
    pub audit_trail_url: Option<String>,
}

/// One page of transactions, with the total count for paging.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct TransactionPage {
    pub count: Option<u64>,
    #[serde(default)]
    pub data: Vec<Transaction>,
}

/// A document notarized during a meeting.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct NotarizedDocument {
    #[serde(default)]
    pub notarial_acts: Vec<String>,
    pub document_url: Option<String>,
}

/// Credentials a third party can use to verify the notarization.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct VerificationCredentials {
    pub retrieval_id: Option<String>,
    pub retrieval_pin: Option<String>,
    pub last_name: Option<String>,
    pub date_completed: Option<String>,
}

/// Photo identification captured from the signer during the meeting.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct SignerPhotoIdentification {
    pub primary_front: Option<String>,
    pub primary_back: Option<String>,
    pub secondary_front: Option<String>,
}

/// Record of the notarization meeting itself.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotarizationRecord {
    pub id: String,
    pub meeting_start: Option<String>,
    pub meeting_end: Option<String>,
    pub notary_name: Option<String>,
    pub notary_registration: Option<String>,
    pub notary_county_city: Option<String>,
    pub signer_info: Option<SignerInfo>,
    #[serde(default)]
    pub notarized_documents: Vec<NotarizedDocument>,
    pub verification_credentials: Option<VerificationCredentials>,
    pub signer_photo_identification: Option<SignerPhotoIdentification>,
}

// ============================================================================
// Operations
// ============================================================================

/// Transaction operations.
#[derive(Debug, Clone, Copy)]
pub struct Transactions<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> Transactions<'a> {
    pub(crate) const fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Create a new notarization transaction.
    ///
    /// Raw document bytes in the request are Base64-encoded before
    /// submission.
    ///
    /// # Errors
    ///
    /// Returns an error only on transport failure.
    pub async fn create(&self, request: &TransactionRequest) -> notarize_core::Result<Outcome<Transaction>> {
        let body = serde_json::to_value(request)?;
        let envelope = self
            .dispatcher
            .send(Method::Post, "transactions", None, Some(&body))
            .await?;
        if envelope.status() == 404 {
            return Ok(Outcome {
                success: envelope.ok(),
                value: None,
                error: envelope.payload_str("error").map(ToOwned::to_owned),
                errors: None,
            });
        }
        Ok(Outcome::with_value(envelope.ok(), envelope.decode()))
    }

    /// Retrieve a transaction by id.
    ///
    /// # Errors
    ///
    /// Returns an error only on transport failure.
    pub async fn retrieve(&self, id: &str) -> notarize_core::Result<Outcome<Transaction>> {
        let envelope = self
            .dispatcher
            .send(Method::Get, &format!("transactions/{id}"), None, None)
            .await?;
        if envelope.status() == 404 {
            return Ok(Outcome::with_error(
                envelope.ok(),
                "The indicated transaction does not exist",
            ));
        }
        Ok(Outcome::with_value(envelope.ok(), envelope.decode()))
    }

    /// List transactions, newest first. Defaults: limit 10, offset 0.
    ///
    /// # Errors
    ///
    /// Returns an error only on transport failure.
    pub async fn list(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> notarize_core::Result<Outcome<TransactionPage>> {
        let query = [
            ("limit", QueryValue::from(limit.unwrap_or(DEFAULT_LIST_LIMIT))),
            ("offset", QueryValue::from(offset.unwrap_or(0))),
        ];
        let envelope = self
            .dispatcher
            .send(Method::Get, "transactions", Some(&query), None)
            .await?;
        Ok(Outcome::with_value(envelope.ok(), envelope.decode()))
    }

    /// Update a transaction that is still in draft.
    ///
    /// A 422 from the service carries the validation `errors` array.
    ///
    /// # Errors
    ///
    /// Returns an error only on transport failure.
    pub async fn update(
        &self,
        id: &str,
        update: &TransactionUpdate,
    ) -> notarize_core::Result<Outcome<Transaction>> {
        let body = serde_json::to_value(update)?;
        let envelope = self
            .dispatcher
            .send(Method::Put, &format!("transactions/{id}"), None, Some(&body))
            .await?;
        if envelope.status() == 422 {
            return Ok(Outcome::with_errors(envelope.ok(), envelope.payload_errors()));
        }
        Ok(Outcome::with_value(envelope.ok(), envelope.decode()))
    }

    /// Take a draft transaction out of draft and start the workflow.
    ///
    /// # Errors
    ///
    /// Returns an error only on transport failure.
    pub async fn activate(
        &self,
        id: &str,
        suppress_email: Option<bool>,
    ) -> notarize_core::Result<Outcome<Transaction>> {
        let body = suppress_email.map(|flag| json!({ "suppressEmail": flag }));
        let envelope = self
            .dispatcher
            .send(
                Method::Post,
                &format!("transactions/{id}/notarization_ready"),
                None,
                body.as_ref(),
            )
            .await?;
        if envelope.status() == 404 {
            return Ok(Outcome::with_error(
                envelope.ok(),
                "The indicated transaction does not exist",
            ));
        }
        Ok(Outcome::with_value(envelope.ok(), envelope.decode()))
    }

    /// Add a document to a transaction that is still in draft.
    ///
    /// # Errors
    ///
    /// Returns an error only on transport failure.
    pub async fn add_document(
        &self,
        id: &str,
        document: &DocumentSubmission,
    ) -> notarize_core::Result<Outcome<Document>> {
        let body = serde_json::to_value(document)?;
        let envelope = self
            .dispatcher
            .send(
                Method::Post,
                &format!("transactions/{id}/documents"),
                None,
                Some(&body),
            )
            .await?;
        if envelope.status() == 404 {
            return Ok(Outcome {
                success: envelope.ok(),
                value: None,
                error: envelope.payload_str("error").map(ToOwned::to_owned),
                errors: None,
            });
        }
        Ok(Outcome::with_value(envelope.ok(), envelope.decode()))
    }

    /// Permanently delete a transaction.
    ///
    /// # Errors
    ///
    /// Returns an error only on transport failure.
    pub async fn delete(&self, id: &str) -> notarize_core::Result<Outcome<DeleteAck>> {
        let envelope = self
            .dispatcher
            .send(Method::Delete, &format!("transactions/{id}"), None, None)
            .await?;
        if envelope.status() == 404 {
            return Ok(Outcome::with_error(
                envelope.ok(),
                "The indicated transaction does not exist",
            ));
        }
        Ok(Outcome::with_value(envelope.ok(), envelope.decode()))
    }

    /// Resend the signing invitation email, optionally replacing the
    /// message to the signer.
    ///
    /// # Errors
    ///
    /// Returns an error only on transport failure.
    pub async fn resend_email(
        &self,
        id: &str,
        message_to_signer: Option<&str>,
    ) -> notarize_core::Result<Outcome<Transaction>> {
        let body = message_to_signer.map(|message| json!({ "messageToSigner": message }));
        let envelope = self
            .dispatcher
            .send(
                Method::Post,
                &format!("transactions/{id}/send_email"),
                None,
                body.as_ref(),
            )
            .await?;
        if envelope.status() == 404 {
            return Ok(Outcome::with_error(
                envelope.ok(),
                "The indicated transaction does not exist",
            ));
        }
        Ok(Outcome::with_value(envelope.ok(), envelope.decode()))
    }

    /// Resend the signing invitation SMS, optionally to a different
    /// phone number.
    ///
    /// # Errors
    ///
    /// Returns an error only on transport failure.
    pub async fn resend_sms(
        &self,
        id: &str,
        phone: Option<&Phone>,
    ) -> notarize_core::Result<Outcome<Transaction>> {
        let body = match phone {
            Some(phone) => Some(json!({ "phone": serde_json::to_value(phone)? })),
            None => None,
        };
        let envelope = self
            .dispatcher
            .send(
                Method::Post,
                &format!("transactions/{id}/send_sms"),
                None,
                body.as_ref(),
            )
            .await?;
        if envelope.status() == 404 {
            return Ok(Outcome::with_error(
                envelope.ok(),
                "The indicated transaction does not exist",
            ));
        }
        Ok(Outcome::with_value(envelope.ok(), envelope.decode()))
    }

    /// Retrieve the meeting record produced by a completed
    /// notarization.
    ///
    /// # Errors
    ///
    /// Returns an error only on transport failure.
    pub async fn meeting_record(
        &self,
        id: &str,
    ) -> notarize_core::Result<Outcome<NotarizationRecord>> {
        let envelope = self
            .dispatcher
            .send(
                Method::Get,
                &format!("notarization_records/{id}"),
                None,
                None,
            )
            .await?;
        if envelope.status() == 404 {
            return Ok(Outcome::with_error(
                envelope.ok(),
                "The indicated transaction does not exist",
            ));
        }
        Ok(Outcome::with_value(envelope.ok(), envelope.decode()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_resource_bytes_serialize_as_base64() {
        let resource = DocumentResource::Bytes(b"%PDF-1.4 stub".to_vec());
        let value = serde_json::to_value(&resource).expect("serialize");
        assert_eq!(value, serde_json::json!("JVBERi0xLjQgc3R1Yg=="));
    }

    #[test]
    fn document_resource_text_passes_through() {
        let resource = DocumentResource::Text("https://example.com/deed.pdf".to_owned());
        let value = serde_json::to_value(&resource).expect("serialize");
        assert_eq!(value, serde_json::json!("https://example.com/deed.pdf"));
    }

    #[test]
    fn request_serializes_caller_naming_and_skips_unset() {
        let request = TransactionRequest {
            signers: vec![Signer {
                email: "ann@example.com".to_owned(),
                first_name: Some("Ann".to_owned()),
                ..Signer::default()
            }],
            transaction_name: Some("Deed of Trust".to_owned()),
            ..TransactionRequest::default()
        };

        let value = serde_json::to_value(&request).expect("serialize");
        assert_eq!(value["transactionName"], "Deed of Trust");
        assert_eq!(value["signers"][0]["email"], "ann@example.com");
        assert_eq!(value["signers"][0]["firstName"], "Ann");
        // Unset optional fields are omitted, not serialized as null.
        assert!(value.get("draft").is_none());
        assert!(value["signers"][0].get("lastName").is_none());
    }

    #[test]
    fn signing_destination_kind_serializes_as_type() {
        let destination = SigningDestination {
            kind: Some("signature".to_owned()),
            page_number: Some(1),
            ..SigningDestination::default()
        };
        let value = serde_json::to_value(&destination).expect("serialize");
        assert_eq!(value["type"], "signature");
        assert_eq!(value["pageNumber"], 1);
    }

    #[test]
    fn transaction_decodes_from_caller_naming() {
        let payload = serde_json::json!({
            "id": "t-1",
            "transactionName": "Deed of Trust",
            "status": "sent",
            "documents": [{"id": "d-1", "documentName": "deed.pdf"}],
            "signerInfo": {"email": "ann@example.com", "firstName": "Ann"}
        });

        let transaction: Transaction = serde_json::from_value(payload).expect("decode");
        assert_eq!(transaction.id, "t-1");
        assert_eq!(transaction.transaction_name.as_deref(), Some("Deed of Trust"));
        assert_eq!(transaction.documents.len(), 1);
        assert_eq!(
            transaction
                .signer_info
                .as_ref()
                .and_then(|info| info.email.as_deref()),
            Some("ann@example.com")
        );
    }
}
