//! The Notarize client.

use crate::config::{NotarizeConfig, TransportConfig};
use crate::dispatcher::Dispatcher;
use crate::documents::Documents;
use crate::outcome::Outcome;
use crate::templates::Templates;
use crate::transactions::Transactions;
use crate::transport::HttpTransport;
use crate::webhooks::{WebhookSettings, Webhooks};

/// Client for the Notarize API.
///
/// Construction is free of network effects: it parses the host, builds
/// the transport, and nothing else. When a webhook URL was configured,
/// apply it with the explicit [`Notarize::sync_webhook`] step.
///
/// # Example
///
/// ```no_run
/// use notarize::{Notarize, NotarizeConfig};
///
/// # async fn run() -> notarize::Result<()> {
/// let client = Notarize::new(NotarizeConfig::new("my-api-key"))?;
/// let outcome = client.transactions().retrieve("t-123").await?;
/// if let Some(transaction) = outcome.value {
///     println!("status: {:?}", transaction.status);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Notarize {
    dispatcher: Dispatcher,
    webhook_url: Option<String>,
    webhook_header: Option<String>,
}

impl Notarize {
    /// Create a client with the default transport configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured host does not form a valid
    /// URL.
    pub fn new(config: NotarizeConfig) -> notarize_core::Result<Self> {
        Self::with_transport(config, TransportConfig::default())
    }

    /// Create a client with a custom transport configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured host does not form a valid
    /// URL.
    pub fn with_transport(
        config: NotarizeConfig,
        transport: TransportConfig,
    ) -> notarize_core::Result<Self> {
        let dispatcher = Dispatcher::new(
            HttpTransport::new(transport),
            &config.host,
            config.api_key,
        )?;
        Ok(Self {
            dispatcher,
            webhook_url: config.webhook_url,
            webhook_header: config.webhook_header,
        })
    }

    /// Document operations.
    #[must_use]
    pub const fn documents(&self) -> Documents<'_> {
        Documents::new(&self.dispatcher)
    }

    /// Transaction operations.
    #[must_use]
    pub const fn transactions(&self) -> Transactions<'_> {
        Transactions::new(&self.dispatcher)
    }

    /// Template operations.
    #[must_use]
    pub const fn templates(&self) -> Templates<'_> {
        Templates::new(&self.dispatcher)
    }

    /// Webhook operations.
    #[must_use]
    pub const fn webhooks(&self) -> Webhooks<'_> {
        Webhooks::new(&self.dispatcher)
    }

    /// The dispatcher every resource operation goes through.
    #[must_use]
    pub const fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Apply the webhook URL and header given at configuration time.
    ///
    /// Performs the one webhook update the configuration asked for,
    /// overwriting whatever the service had registered. Returns
    /// `None` without touching the network when no webhook URL was
    /// configured.
    ///
    /// # Errors
    ///
    /// Returns an error only on transport failure.
    pub async fn sync_webhook(&self) -> notarize_core::Result<Option<Outcome<WebhookSettings>>> {
        match &self.webhook_url {
            Some(url) => {
                let outcome = self
                    .webhooks()
                    .update(url, self.webhook_header.as_deref())
                    .await?;
                Ok(Some(outcome))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_HOST;

    #[test]
    fn new_uses_default_host() {
        let client = Notarize::new(NotarizeConfig::new("test-key")).expect("client");
        assert_eq!(
            client.dispatcher().base_url().as_str(),
            format!("https://{DEFAULT_HOST}")
        );
    }

    #[test]
    fn new_rejects_malformed_host() {
        let config = NotarizeConfig::new("test-key").host("http://[bad");
        assert!(Notarize::new(config).is_err());
    }

    #[test]
    fn client_is_clone() {
        let client = Notarize::new(NotarizeConfig::new("test-key")).expect("client");
        let _cloned = client.clone();
    }
}
