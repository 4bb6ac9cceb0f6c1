// Client configuration for the push gateway: endpoint and transport timeouts

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use super::serde_time::{deserialize_duration_secs, serialize_duration_secs};
use super::{DEFAULT_ENDPOINT, NotificationError, NotificationResult};

/// Environment variable overriding the gateway endpoint
pub const ENDPOINT_ENV: &str = "EXPO_PUSH_ENDPOINT";

/// Environment variable overriding the request timeout, in seconds
pub const TIMEOUT_ENV: &str = "EXPO_PUSH_TIMEOUT_SECS";

/// Configuration shared by the client and its HTTP transport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Batch-send endpoint every request is posted to
    pub endpoint: Url,
    /// Total request timeout
    #[serde(
        serialize_with = "serialize_duration_secs",
        deserialize_with = "deserialize_duration_secs"
    )]
    pub timeout: Duration,
    /// TCP/TLS connect timeout
    #[serde(
        serialize_with = "serialize_duration_secs",
        deserialize_with = "deserialize_duration_secs"
    )]
    pub connect_timeout: Duration,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("expo-push-notify/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            ..Self::default()
        }
    }

    /// Defaults overlaid with `EXPO_PUSH_ENDPOINT` and `EXPO_PUSH_TIMEOUT_SECS`
    pub fn from_env() -> NotificationResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> NotificationResult<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENDPOINT_ENV) {
            config = config.with_endpoint_str(raw.trim())?;
        }

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|e| NotificationError::Configuration {
                    field: TIMEOUT_ENV.to_string(),
                    message: format!("expected whole seconds, got '{}': {}", raw, e),
                })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn with_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Parse and set the endpoint, rejecting anything that is not http(s)
    pub fn with_endpoint_str(self, endpoint: &str) -> NotificationResult<Self> {
        let url = Url::parse(endpoint).map_err(|e| NotificationError::Configuration {
            field: "endpoint".to_string(),
            message: format!("invalid URL '{}': {}", endpoint, e),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(self.with_endpoint(url)),
            scheme => Err(NotificationError::Configuration {
                field: "endpoint".to_string(),
                message: format!("unsupported URL scheme '{}'", scheme),
            }),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

fn default_endpoint() -> Url {
    // Constant input; parse cannot fail
    Url::parse(DEFAULT_ENDPOINT).unwrap_or_else(|e| panic!("invalid built-in endpoint: {e}"))
}
