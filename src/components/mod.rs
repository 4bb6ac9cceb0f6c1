// Push notification components: request accumulation, validation, wire compilation
// and gateway response normalization for the Expo push service

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub mod config;
pub mod message;
pub mod request;
pub mod response;
pub mod serde_time;
pub mod validation;

pub use config::ClientConfig;
pub use message::{WireMessage, compile, compile_batch};
pub use request::{NotificationRequest, Recipients};
pub use response::{PushTicket, SendResult, SendStatus, normalize};
pub use validation::{ValidationFailure, validate};

/// Default batch-send endpoint of the Expo push gateway
pub const DEFAULT_ENDPOINT: &str = "https://exp.host/--/api/v2/push/send";

/// Literal prefix every accepted recipient token must start with
pub const TOKEN_PREFIX: &str = "ExponentPushToken[";

/// Synthetic token appended when test mode is switched on
pub const TEST_TOKEN: &str = "ExponentPushToken[invalid-test-token]";

/// Sound value used unless the caller overrides it
pub const DEFAULT_SOUND: &str = "default";

/// Hard gateway limit on messages per request
pub const MAX_RECIPIENTS: usize = 100;

/// Hard gateway limit on serialized auxiliary data, in bytes
pub const MAX_DATA_BYTES: usize = 4000;

/// Correlation ID attached to every dispatch for log correlation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CorrelationId(String);

impl CorrelationId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn from_string(s: String) -> Self {
        Self(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error types for push dispatch
///
/// Gateway-side failures are not represented here: they come back as a
/// [`SendResult`] with [`SendStatus::Error`].
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    /// Request rejected locally before any network activity
    #[error("Validation failed: {}", errors.join("; "))]
    Validation { errors: Vec<String> },
    /// Transport could not complete the HTTP exchange
    #[error("Transport error posting to {endpoint}: {message}")]
    Transport { endpoint: String, message: String },
    /// Outgoing batch could not be encoded
    #[error("Serialization error: {message}")]
    Serialization { message: String },
    /// Invalid client configuration
    #[error("Configuration error in {field}: {message}")]
    Configuration { field: String, message: String },
}

impl NotificationError {
    /// Validation messages, empty for every other variant
    pub fn validation_errors(&self) -> &[String] {
        match self {
            NotificationError::Validation { errors } => errors,
            _ => &[],
        }
    }
}

impl From<serde_json::Error> for NotificationError {
    fn from(err: serde_json::Error) -> Self {
        NotificationError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Type alias for push results
pub type NotificationResult<T> = Result<T, NotificationError>;
