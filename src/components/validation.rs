// Pre-flight validation against gateway limits
// All checks run; messages are reported in a fixed order

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::response::SendStatus;
use super::{MAX_DATA_BYTES, MAX_RECIPIENTS, NotificationError, NotificationRequest, NotificationResult};

pub const TOO_MANY_RECIPIENTS: &str = "Tokens exceed 100 limit";
pub const DATA_NOT_KEYED: &str = "Data indexes must be string";
pub const DATA_TOO_LARGE: &str = "Data exceeds 4kB limit";

/// Check a request before anything is sent
///
/// Returns [`NotificationError::Validation`] carrying every failed check.
pub fn validate(request: &NotificationRequest) -> NotificationResult<()> {
    let mut errors = Vec::new();

    if request.recipients().len() > MAX_RECIPIENTS {
        errors.push(TOO_MANY_RECIPIENTS.to_string());
    }

    if let Some(data) = request.data() {
        if exposes_zero_index(data) {
            errors.push(DATA_NOT_KEYED.to_string());
        }

        if !is_empty_data(data) && serialized_len(data)? > MAX_DATA_BYTES {
            errors.push(DATA_TOO_LARGE.to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(NotificationError::Validation { errors })
    }
}

/// Whether data is addressable by index `0`
///
/// Arrays and non-null scalars are positional by nature; objects only fail
/// when they carry a non-null value under a literal `"0"` key.
fn exposes_zero_index(data: &Value) -> bool {
    match data {
        Value::Object(map) => map.get("0").is_some_and(|v| !v.is_null()),
        Value::Array(items) => !items.is_empty(),
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Bool(_) | Value::Number(_) => true,
    }
}

/// Empty data is omitted from messages and skips the size check
pub(crate) fn is_empty_data(data: &Value) -> bool {
    match data {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

fn serialized_len(data: &Value) -> NotificationResult<usize> {
    Ok(serde_json::to_vec(data)?.len())
}

/// Public error shape for a rejected request: `{ status: "error", message: [...] }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFailure {
    pub status: SendStatus,
    pub message: Vec<String>,
}

impl ValidationFailure {
    pub fn new(errors: Vec<String>) -> Self {
        Self {
            status: SendStatus::Error,
            message: errors,
        }
    }

    /// Extract the failure from a validation error, `None` for other variants
    pub fn from_error(err: &NotificationError) -> Option<Self> {
        match err {
            NotificationError::Validation { errors } => Some(Self::new(errors.clone())),
            _ => None,
        }
    }
}
