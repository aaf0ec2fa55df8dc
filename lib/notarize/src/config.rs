//! Client configuration types.

use std::time::Duration;

/// Default production host for the Notarize API.
pub const DEFAULT_HOST: &str = "api.notarize.com/v1/";

/// Configuration for the Notarize client.
///
/// The credential and host are fixed at construction and never mutated
/// afterwards. Constructing a [`crate::Notarize`] from this performs no
/// network I/O; the optional webhook settings are applied by the
/// explicit [`crate::Notarize::sync_webhook`] step.
#[derive(Debug, Clone)]
pub struct NotarizeConfig {
    /// Opaque API credential sent on every request.
    pub api_key: String,
    /// API host. May carry an explicit scheme (useful against local
    /// test servers); otherwise `https` is assumed.
    pub host: String,
    /// Webhook URL to apply via [`crate::Notarize::sync_webhook`].
    pub webhook_url: Option<String>,
    /// Header value the service echoes on webhook deliveries.
    pub webhook_header: Option<String>,
}

impl NotarizeConfig {
    /// Create a configuration with the given credential and defaults
    /// for everything else.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            host: DEFAULT_HOST.to_owned(),
            webhook_url: None,
            webhook_header: None,
        }
    }

    /// Override the API host.
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the webhook URL applied by [`crate::Notarize::sync_webhook`].
    #[must_use]
    pub fn webhook_url(mut self, url: impl Into<String>) -> Self {
        self.webhook_url = Some(url.into());
        self
    }

    /// Set the webhook header applied with the webhook URL.
    #[must_use]
    pub fn webhook_header(mut self, header: impl Into<String>) -> Self {
        self.webhook_header = Some(header.into());
        self
    }
}

/// Configuration for the HTTP transport.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Request timeout duration.
    pub timeout: Duration,
    /// Connection timeout duration.
    pub connect_timeout: Duration,
    /// Maximum idle connections per host.
    pub pool_idle_per_host: usize,
    /// Idle connection timeout.
    pub pool_idle_timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            pool_idle_per_host: 32,
            pool_idle_timeout: Duration::from_secs(90),
        }
    }
}

impl TransportConfig {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> TransportConfigBuilder {
        TransportConfigBuilder::default()
    }
}

/// Builder for [`TransportConfig`].
#[derive(Debug, Clone, Default)]
pub struct TransportConfigBuilder {
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    pool_idle_per_host: Option<usize>,
    pool_idle_timeout: Option<Duration>,
}

impl TransportConfigBuilder {
    /// Set the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connection timeout.
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set the maximum idle connections per host.
    #[must_use]
    pub const fn pool_idle_per_host(mut self, count: usize) -> Self {
        self.pool_idle_per_host = Some(count);
        self
    }

    /// Set the idle connection timeout.
    #[must_use]
    pub const fn pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.pool_idle_timeout = Some(timeout);
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> TransportConfig {
        let defaults = TransportConfig::default();
        TransportConfig {
            timeout: self.timeout.unwrap_or(defaults.timeout),
            connect_timeout: self.connect_timeout.unwrap_or(defaults.connect_timeout),
            pool_idle_per_host: self
                .pool_idle_per_host
                .unwrap_or(defaults.pool_idle_per_host),
            pool_idle_timeout: self.pool_idle_timeout.unwrap_or(defaults.pool_idle_timeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_transport_config() {
        let config = TransportConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.pool_idle_per_host, 32);
    }

    #[test]
    fn transport_builder_overrides() {
        let config = TransportConfig::builder()
            .timeout(Duration::from_secs(60))
            .pool_idle_per_host(16)
            .build();

        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.pool_idle_per_host, 16);
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
    }

    #[test]
    fn notarize_config_defaults() {
        let config = NotarizeConfig::new("secret-key");
        assert_eq!(config.api_key, "secret-key");
        assert_eq!(config.host, DEFAULT_HOST);
        assert!(config.webhook_url.is_none());
        assert!(config.webhook_header.is_none());
    }

    #[test]
    fn notarize_config_overrides() {
        let config = NotarizeConfig::new("secret-key")
            .host("api.sandbox.notarize.com/v1/")
            .webhook_url("https://example.com/hook")
            .webhook_header("shared-secret");

        assert_eq!(config.host, "api.sandbox.notarize.com/v1/");
        assert_eq!(config.webhook_url.as_deref(), Some("https://example.com/hook"));
        assert_eq!(config.webhook_header.as_deref(), Some("shared-secret"));
    }
}
