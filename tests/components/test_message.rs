//! Tests for components/message.rs

use expo_push_notify::{NotificationRequest, WireMessage, compile};
use serde_json::json;

fn base_request() -> NotificationRequest {
    NotificationRequest::new()
        .to(["ExponentPushToken[a]", "ExponentPushToken[b]"])
        .with_title("Deploy")
        .with_body("Production is live")
        .with_badge(3)
        .with_data(json!({"release": "v2"}))
}

#[test]
fn test_test_mode_messages_are_content_free() {
    let messages = compile(&base_request().test_mode());

    assert_eq!(messages.len(), 3);
    for message in &messages {
        assert_eq!(*message, WireMessage::bare(message.to.clone()));
    }
}

#[test]
fn test_silent_mode_message_shape() {
    let messages = compile(&base_request().silent_mode());

    for message in &messages {
        assert_eq!(message.sound, None);
        assert_eq!(message.badge, Some(3));
        assert_eq!(message.data, Some(json!({"release": "v2"})));
        assert!(message.title.is_none());
        assert!(message.body.is_none());
        assert!(message.channel_id.is_none());
    }
}

#[test]
fn test_visible_message_uses_configured_sound() {
    let messages = compile(&base_request().with_sound("alert.caf"));
    assert_eq!(messages[0].sound.as_deref(), Some("alert.caf"));
    assert_eq!(messages[0].title.as_deref(), Some("Deploy"));
    assert_eq!(messages[1].to, "ExponentPushToken[b]");
}

#[test]
fn test_compile_is_repeatable() {
    let request = base_request().with_channel("ops");
    assert_eq!(compile(&request), compile(&request));
}
