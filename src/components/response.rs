// Gateway response normalization
// Maps the raw response body onto a uniform result, correlating tickets
// with recipients by position

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error reported when the gateway returned nothing usable
pub const NO_RESPONSE: &str = "Server did not respond, unknown error";

/// Default ticket message when the gateway gives none
pub const DEFAULT_TICKET_MESSAGE: &str = "Message successfully sent";

/// Batch-level outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SendStatus {
    Ok,
    Error,
}

impl SendStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SendStatus::Ok => "ok",
            SendStatus::Error => "error",
        }
    }
}

impl std::fmt::Display for SendStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-recipient delivery ticket
///
/// `status` and `message` are the gateway's own values, passed through
/// without interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushTicket {
    pub id: Option<String>,
    pub token: String,
    pub status: String,
    pub message: String,
}

/// Normalized outcome of one send
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendResult {
    pub status: SendStatus,
    /// Echo of the request's test flag
    pub test: bool,
    pub results: Vec<PushTicket>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl SendResult {
    pub fn ok(test: bool, results: Vec<PushTicket>) -> Self {
        Self {
            status: SendStatus::Ok,
            test,
            results,
            errors: None,
        }
    }

    pub fn error(test: bool, errors: Vec<String>) -> Self {
        Self {
            status: SendStatus::Error,
            test,
            results: Vec::new(),
            errors: Some(errors),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == SendStatus::Ok
    }

    /// Error messages, empty on success
    pub fn errors(&self) -> &[String] {
        self.errors.as_deref().unwrap_or_default()
    }

    /// Tickets whose gateway status is not `"ok"`
    pub fn failed_tickets(&self) -> impl Iterator<Item = &PushTicket> {
        self.results.iter().filter(|ticket| ticket.status != "ok")
    }
}

/// Normalize a raw gateway body against the recipients it was sent to
pub fn normalize(raw: &str, recipients: &[String], test: bool) -> SendResult {
    let parsed = match serde_json::from_str::<Value>(raw) {
        Ok(value) if !is_falsy(&value) => value,
        _ => {
            let errors = if raw.is_empty() {
                vec![NO_RESPONSE.to_string()]
            } else {
                vec![raw.to_string()]
            };
            tracing::warn!(body = %raw, "Gateway response unreadable");
            return SendResult::error(test, errors);
        },
    };

    let data = match parsed.get("data") {
        Some(data) if !data.is_null() => data,
        _ => {
            let errors = parsed
                .get("errors")
                .filter(|errors| !errors.is_null())
                .map(error_strings)
                .unwrap_or_else(|| vec![raw.to_string()]);
            tracing::warn!(errors = ?errors, "Gateway rejected request");
            return SendResult::error(test, errors);
        },
    };

    let entries: Vec<&Value> = match data {
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    };

    if entries.len() != recipients.len() {
        tracing::warn!(
            tickets = entries.len(),
            recipients = recipients.len(),
            "Ticket count does not match recipient count"
        );
    }

    let results = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| PushTicket {
            id: entry.get("id").and_then(value_to_string),
            token: recipients.get(index).cloned().unwrap_or_default(),
            status: entry
                .get("status")
                .and_then(value_to_string)
                .unwrap_or_default(),
            message: entry
                .get("message")
                .and_then(value_to_string)
                .unwrap_or_else(|| DEFAULT_TICKET_MESSAGE.to_string()),
        })
        .collect();

    SendResult::ok(test, results)
}

/// Loose truthiness used to classify empty replies
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Strings pass through; null counts as absent; anything else is rendered as JSON
fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Render the gateway's `errors` field as a list of strings
///
/// Structured entries such as `{ code, message }` collapse to their message.
fn error_strings(errors: &Value) -> Vec<String> {
    let render = |entry: &Value| match entry.get("message").and_then(Value::as_str) {
        Some(message) => message.to_string(),
        None => value_to_string(entry).unwrap_or_default(),
    };

    match errors {
        Value::Array(items) => items.iter().map(render).collect(),
        other => vec![render(other)],
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn recipients(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_positional_correlation() {
        let raw = r#"{"data":[{"id":"1","status":"ok"},{"status":"error","message":"DeviceNotRegistered"}]}"#;
        let result = normalize(raw, &recipients(&["A", "B"]), false);

        assert!(result.is_ok());
        assert_eq!(
            serde_json::to_value(&result.results).unwrap(),
            json!([
                {"id": "1", "token": "A", "status": "ok", "message": "Message successfully sent"},
                {"id": null, "token": "B", "status": "error", "message": "DeviceNotRegistered"}
            ])
        );
        assert_eq!(result.failed_tickets().count(), 1);
    }

    #[test]
    fn test_empty_body() {
        let result = normalize("", &recipients(&["A"]), true);
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "status": "error",
                "test": true,
                "results": [],
                "errors": ["Server did not respond, unknown error"]
            })
        );
    }

    #[test]
    fn test_unparseable_body_is_echoed() {
        let result = normalize("<html>502 Bad Gateway</html>", &recipients(&["A"]), false);
        assert_eq!(result.status, SendStatus::Error);
        assert_eq!(result.errors(), ["<html>502 Bad Gateway</html>"]);
        assert!(result.results.is_empty());
    }

    #[test]
    fn test_falsy_json_values() {
        for raw in ["null", "false", "0", "[]", "{}", "\"\""] {
            let result = normalize(raw, &[], false);
            assert_eq!(result.errors(), [raw], "body {raw}");
        }
    }

    #[test]
    fn test_structured_gateway_errors() {
        let raw = r#"{"errors":[{"code":"PUSH_TOO_MANY_EXPERIENCE_IDS","message":"Mixed projects"},"plain"]}"#;
        let result = normalize(raw, &recipients(&["A"]), false);
        assert_eq!(result.errors(), ["Mixed projects", "plain"]);
    }

    #[test]
    fn test_missing_data_without_errors_echoes_body() {
        let raw = r#"{"status":"weird"}"#;
        let result = normalize(raw, &recipients(&["A"]), false);
        assert_eq!(result.errors(), [raw]);
    }

    #[test]
    fn test_single_ticket_object() {
        let raw = r#"{"data":{"status":"ok","id":"XXXX-1"}}"#;
        let result = normalize(raw, &recipients(&["A"]), false);
        assert_eq!(result.results.len(), 1);
        assert_eq!(result.results[0].id.as_deref(), Some("XXXX-1"));
        assert_eq!(result.results[0].token, "A");
    }

    #[test]
    fn test_extra_tickets_get_empty_token() {
        let raw = r#"{"data":[{"status":"ok"},{"status":"ok"}]}"#;
        let result = normalize(raw, &recipients(&["A"]), false);
        assert_eq!(result.results[1].token, "");
        assert_eq!(result.results[1].status, "ok");
    }

    #[test]
    fn test_success_shape_has_no_errors_key() {
        let result = normalize(r#"{"data":[]}"#, &[], false);
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"status": "ok", "test": false, "results": []})
        );
    }
}
