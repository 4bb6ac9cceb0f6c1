//! Tests for components/validation.rs

use expo_push_notify::{NotificationError, NotificationRequest, ValidationFailure, validate};
use serde_json::json;

fn tokens(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("ExponentPushToken[device-{i}]")).collect()
}

#[test]
fn test_101_recipients_rejected() {
    let err = validate(&NotificationRequest::new().to(tokens(101))).unwrap_err();
    assert_eq!(err.validation_errors(), ["Tokens exceed 100 limit"]);
}

#[test]
fn test_zero_index_data_rejected() {
    let err = validate(&NotificationRequest::new().with_data(json!({"0": "x"}))).unwrap_err();
    assert_eq!(err.validation_errors(), ["Data indexes must be string"]);
}

#[test]
fn test_oversized_data_rejected() {
    let request = NotificationRequest::new().with_data(json!({"blob": "z".repeat(4096)}));
    let err = validate(&request).unwrap_err();
    assert_eq!(err.validation_errors(), ["Data exceeds 4kB limit"]);
}

#[test]
fn test_valid_request_passes() {
    let request = NotificationRequest::new()
        .to(tokens(100))
        .with_data(json!({"chat_id": 42, "kind": "message"}));
    assert!(validate(&request).is_ok());
}

#[test]
fn test_failure_renders_public_shape() {
    let err = NotificationError::Validation {
        errors: vec!["Tokens exceed 100 limit".to_string()],
    };
    let failure = ValidationFailure::from_error(&err).unwrap();
    assert_eq!(failure.message, ["Tokens exceed 100 limit"]);

    let other = NotificationError::Serialization {
        message: "boom".to_string(),
    };
    assert!(ValidationFailure::from_error(&other).is_none());
}
