// HTTP transport for the Expo gateway built on reqwest
// HTTP/1.1 POST with a JSON body and caching disabled

use reqwest::header::{ACCEPT, CACHE_CONTROL, CONTENT_TYPE, HeaderMap, HeaderValue};
use url::Url;

use super::{PushTransport, TransportFuture};
use crate::components::{ClientConfig, NotificationError, NotificationResult};

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a client honouring the timeouts and user agent from `config`
    pub fn new(config: &ClientConfig) -> NotificationResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .http1_only()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()
            .map_err(|e| NotificationError::Configuration {
                field: "http_client".to_string(),
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self { client })
    }

    /// Wrap an already configured client
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn execute(&self, url: &Url, body: String) -> NotificationResult<String> {
        let transport_error = |message: String| NotificationError::Transport {
            endpoint: url.to_string(),
            message,
        };

        let response = self
            .client
            .post(url.as_str())
            .header(CONTENT_TYPE, "application/json")
            .header(CACHE_CONTROL, "no-cache")
            .body(body)
            .send()
            .await
            .map_err(|e| transport_error(format!("Failed to post batch: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            // Gateway error bodies are JSON the normalizer understands
            tracing::debug!(status = status.as_u16(), endpoint = %url, "Gateway returned non-success status");
        }

        response
            .text()
            .await
            .map_err(|e| transport_error(format!("Failed to read response body: {}", e)))
    }
}

impl PushTransport for HttpTransport {
    fn post<'a>(&'a self, url: &'a Url, body: String) -> TransportFuture<'a> {
        Box::pin(self.execute(url, body))
    }
}
