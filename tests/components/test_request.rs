//! Tests for components/request.rs

use expo_push_notify::{NotificationRequest, Recipients, TEST_TOKEN};

#[test]
fn test_mixed_tokens_keep_valid_ones_in_order() {
    let request = NotificationRequest::new().to(vec![
        "ExponentPushToken[abc]".to_string(),
        "bogus".to_string(),
        "ExponentPushToken[def]".to_string(),
    ]);

    assert_eq!(
        request.recipients(),
        ["ExponentPushToken[abc]", "ExponentPushToken[def]"]
    );
}

#[test]
fn test_recipient_conversions() {
    let owned = String::from("ExponentPushToken[x]");
    let slice: &[&str] = &["ExponentPushToken[y]", "nope"];

    assert_eq!(Recipients::from(&owned).0, ["ExponentPushToken[x]"]);
    assert_eq!(Recipients::from(slice).0.len(), 2);

    let request = NotificationRequest::new().to(&owned).to(slice);
    assert_eq!(
        request.recipients(),
        ["ExponentPushToken[x]", "ExponentPushToken[y]"]
    );
}

#[test]
fn test_test_mode_twice_appends_two_tokens() {
    let request = NotificationRequest::new().test_mode().test_mode();
    assert_eq!(request.recipients(), [TEST_TOKEN, TEST_TOKEN]);
}

#[test]
fn test_builder_sets_every_field() {
    let request = NotificationRequest::new()
        .with_title("Title")
        .with_body("Body")
        .with_badge(7)
        .with_sound("chime.wav")
        .with_channel("updates")
        .silent_mode();

    assert_eq!(request.title(), Some("Title"));
    assert_eq!(request.body(), Some("Body"));
    assert_eq!(request.badge(), Some(7));
    assert_eq!(request.sound(), "chime.wav");
    assert_eq!(request.channel(), Some("updates"));
    assert!(request.is_silent());
    assert!(!request.is_test());
}
