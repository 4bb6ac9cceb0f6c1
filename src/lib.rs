//! Client-side builder and result normalizer for the Expo push gateway
//!
//! A [`NotificationRequest`] accumulates recipients and content through a
//! fluent API. [`PushClient::send`] validates it against the gateway limits,
//! expands it into one wire message per recipient, posts the batch in a
//! single HTTP request and normalizes the reply into a [`SendResult`] whose
//! tickets line up with the request's recipients.
//!
//! ```no_run
//! use expo_push_notify::{NotificationRequest, PushClient};
//!
//! # async fn run() -> expo_push_notify::NotificationResult<()> {
//! let client = PushClient::with_defaults()?;
//! let request = NotificationRequest::new()
//!     .to(["ExponentPushToken[xxxxxxxxxxxxxxxxxxxxxx]"])
//!     .with_title("Build finished")
//!     .with_body("All checks passed")
//!     .with_badge(1);
//!
//! let result = client.send(&request).await?;
//! for ticket in result.failed_tickets() {
//!     eprintln!("{}: {}", ticket.token, ticket.message);
//! }
//! # Ok(())
//! # }
//! ```

pub mod backends;
pub mod components;

use tracing::Instrument;

pub use backends::*;
pub use components::*;

/// Dispatches notification requests through a transport
///
/// Holds no per-send state; one client can serve any number of sends,
/// concurrently if the transport allows it.
#[derive(Debug, Clone)]
pub struct PushClient<T = HttpTransport> {
    config: ClientConfig,
    transport: T,
}

impl PushClient<HttpTransport> {
    /// Client posting over HTTP with the given configuration
    pub fn new(config: ClientConfig) -> NotificationResult<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self { config, transport })
    }

    /// Client for the public gateway endpoint with default timeouts
    pub fn with_defaults() -> NotificationResult<Self> {
        Self::new(ClientConfig::default())
    }
}

impl<T: PushTransport> PushClient<T> {
    /// Client posting through a caller-supplied transport
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Validate, compile and post `request`, then normalize the reply
    ///
    /// Returns `Err` only for local failures: validation (the transport is
    /// never called) or batch encoding. Gateway and network failures come
    /// back as a [`SendResult`] with [`SendStatus::Error`].
    pub async fn send(&self, request: &NotificationRequest) -> NotificationResult<SendResult> {
        let correlation_id = CorrelationId::generate();
        let span = tracing::info_span!(
            "push_send",
            correlation_id = %correlation_id,
            recipients = request.recipients().len(),
            test = request.is_test(),
        );

        self.dispatch(request).instrument(span).await
    }

    /// Send with test mode set for this dispatch only
    ///
    /// Applies [`NotificationRequest::with_test_mode`] to a copy, so `true`
    /// adds the synthetic token (counted against the recipient limit and
    /// correlated like any other) while `request` itself is left untouched.
    pub async fn send_with_test(
        &self,
        request: &NotificationRequest,
        test: bool,
    ) -> NotificationResult<SendResult> {
        let request = request.clone().with_test_mode(test);
        self.send(&request).await
    }

    /// Shorthand for `send_with_test(request, true)`
    pub async fn send_test(&self, request: &NotificationRequest) -> NotificationResult<SendResult> {
        self.send_with_test(request, true).await
    }

    async fn dispatch(&self, request: &NotificationRequest) -> NotificationResult<SendResult> {
        if let Err(err) = validate(request) {
            tracing::warn!(errors = ?err.validation_errors(), "Push request rejected");
            return Err(err);
        }

        let body = compile_batch(request)?;
        tracing::debug!(bytes = body.len(), "Compiled push batch");

        let endpoint = &self.config.endpoint;
        tracing::info!(endpoint = %endpoint, "Posting push batch");

        let raw = match self.transport.post(endpoint, body).await {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(error = %err, "Push transport failed");
                String::new()
            },
        };

        let result = normalize(&raw, request.recipients(), request.is_test());
        tracing::info!(
            status = %result.status,
            tickets = result.results.len(),
            failed = result.failed_tickets().count(),
            "Push batch completed"
        );

        Ok(result)
    }
}
