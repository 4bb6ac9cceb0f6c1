//! Tests for components/response.rs

use expo_push_notify::{PushTicket, SendStatus, normalize};

#[test]
fn test_tickets_follow_recipient_order() {
    let recipients = vec!["A".to_string(), "B".to_string()];
    let raw = r#"{"data":[{"id":"1","status":"ok"},{"status":"error","message":"DeviceNotRegistered"}]}"#;

    let result = normalize(raw, &recipients, false);

    assert_eq!(result.status, SendStatus::Ok);
    assert_eq!(
        result.results,
        vec![
            PushTicket {
                id: Some("1".to_string()),
                token: "A".to_string(),
                status: "ok".to_string(),
                message: "Message successfully sent".to_string(),
            },
            PushTicket {
                id: None,
                token: "B".to_string(),
                status: "error".to_string(),
                message: "DeviceNotRegistered".to_string(),
            },
        ]
    );
}

#[test]
fn test_empty_reply() {
    let result = normalize("", &["A".to_string()], false);
    assert_eq!(result.status, SendStatus::Error);
    assert_eq!(result.errors(), ["Server did not respond, unknown error"]);
    assert!(result.results.is_empty());
}

#[test]
fn test_test_flag_is_echoed() {
    let result = normalize(r#"{"data":[]}"#, &[], true);
    assert!(result.test);
    assert!(result.is_ok());
}

#[test]
fn test_errors_field_preferred_over_raw_body() {
    let result = normalize(r#"{"errors":["quota exceeded"]}"#, &[], false);
    assert_eq!(result.errors(), ["quota exceeded"]);
}
