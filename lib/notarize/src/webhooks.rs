//! Webhook operations.
//!
//! One webhook URL is registered per credential; the service posts
//! transaction status changes to it.

use serde::{Deserialize, Serialize};

use notarize_core::Method;

use crate::dispatcher::Dispatcher;
use crate::outcome::Outcome;

/// Webhook registration as the service reports it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[allow(missing_docs)]
pub struct WebhookSettings {
    pub url: Option<String>,
    pub header: Option<String>,
}

/// An event delivered to the webhook, used by [`Webhooks::simulate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookEvent {
    /// Event name, e.g. `"transaction_status_update"`.
    pub event: String,
    /// Event payload.
    pub data: WebhookEventData,
}

/// Payload of a simulated webhook event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct WebhookEventData {
    pub transaction_id: String,
    pub status: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WebhookUpdate<'a> {
    url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    header: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SimulateRequest<'a> {
    webhook_body: &'a WebhookEvent,
}

/// Webhook operations.
#[derive(Debug, Clone, Copy)]
pub struct Webhooks<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> Webhooks<'a> {
    pub(crate) const fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Set or replace the webhook URL for this credential.
    ///
    /// Overwrites any previously registered URL. To remove the webhook
    /// entirely, use [`Webhooks::delete`].
    ///
    /// # Errors
    ///
    /// Returns an error only on transport failure.
    pub async fn update(
        &self,
        url: &str,
        header: Option<&str>,
    ) -> notarize_core::Result<Outcome<WebhookSettings>> {
        let body = serde_json::to_value(WebhookUpdate { url, header })?;
        let envelope = self
            .dispatcher
            .send(Method::Post, "webhooks", None, Some(&body))
            .await?;
        Ok(Outcome::with_value(envelope.ok(), envelope.decode()))
    }

    /// Retrieve the webhook registered for this credential.
    ///
    /// When no webhook is set the service answers with an errors
    /// object rather than a registration; that yields an outcome with
    /// no value.
    ///
    /// # Errors
    ///
    /// Returns an error only on transport failure.
    pub async fn retrieve(&self) -> notarize_core::Result<Outcome<WebhookSettings>> {
        let envelope = self
            .dispatcher
            .send(Method::Get, "webhooks", None, None)
            .await?;
        let not_registered = envelope
            .payload()
            .and_then(|payload| payload.get("errors")?.get("request")?.as_str())
            == Some("resource not found");
        let value = if not_registered {
            None
        } else {
            envelope.decode()
        };
        Ok(Outcome::with_value(envelope.ok(), value))
    }

    /// Delete the webhook registered for this credential.
    ///
    /// A 404 means there was nothing to delete, which is reported as
    /// success.
    ///
    /// # Errors
    ///
    /// Returns an error only on transport failure.
    pub async fn delete(&self) -> notarize_core::Result<Outcome<()>> {
        let envelope = self
            .dispatcher
            .send(Method::Delete, "webhooks", None, None)
            .await?;
        if envelope.status() == 404 {
            return Ok(Outcome::with_value(true, None));
        }
        Ok(Outcome::with_value(envelope.ok(), None))
    }

    /// Send a test event to the registered webhook URL, without
    /// touching any real transaction.
    ///
    /// # Errors
    ///
    /// Returns an error only on transport failure.
    pub async fn simulate(&self, event: &WebhookEvent) -> notarize_core::Result<Outcome<()>> {
        let body = serde_json::to_value(SimulateRequest { webhook_body: event })?;
        let envelope = self
            .dispatcher
            .send(Method::Post, "webhook_tests", None, Some(&body))
            .await?;
        if envelope.payload_str("error") == Some("Missing Webhook") {
            return Ok(Outcome::with_error(
                envelope.ok(),
                "There is no defined webhook URL for this Api Key",
            ));
        }
        Ok(Outcome::with_value(envelope.ok(), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_body_omits_unset_header() {
        let body = serde_json::to_value(WebhookUpdate {
            url: "https://example.com/hook",
            header: None,
        })
        .expect("serialize");
        assert_eq!(body, serde_json::json!({"url": "https://example.com/hook"}));
    }

    #[test]
    fn simulate_body_wraps_event() {
        let event = WebhookEvent {
            event: "transaction_status_update".to_owned(),
            data: WebhookEventData {
                transaction_id: "t-1".to_owned(),
                status: "completed".to_owned(),
            },
        };

        let body = serde_json::to_value(SimulateRequest {
            webhook_body: &event,
        })
        .expect("serialize");
        assert_eq!(
            body,
            serde_json::json!({
                "webhookBody": {
                    "event": "transaction_status_update",
                    "data": {"transactionId": "t-1", "status": "completed"}
                }
            })
        );
    }
}
