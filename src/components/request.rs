// Notification request accumulator with fluent, chainable configuration
// Cross-field checks are deferred to the validation module

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{DEFAULT_SOUND, TEST_TOKEN, TOKEN_PREFIX};

/// In-progress notification for a batch of recipient tokens
///
/// Recipient order is the correlation key for gateway tickets, so tokens are
/// kept exactly in insertion order, synthetic test tokens included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationRequest {
    recipients: Vec<String>,
    title: Option<String>,
    body: Option<String>,
    badge: Option<u32>,
    data: Option<Value>,
    sound: String,
    channel: Option<String>,
    test: bool,
    silent: bool,
}

impl NotificationRequest {
    pub fn new() -> Self {
        Self {
            recipients: Vec::new(),
            title: None,
            body: None,
            badge: None,
            data: None,
            sound: DEFAULT_SOUND.to_string(),
            channel: None,
            test: false,
            silent: false,
        }
    }

    /// Append recipient tokens
    ///
    /// Only tokens starting with `ExponentPushToken[` are kept; anything else
    /// is dropped silently.
    pub fn to(mut self, recipients: impl Into<Recipients>) -> Self {
        for token in recipients.into().0 {
            if is_push_token(&token) {
                self.recipients.push(token);
            } else {
                tracing::debug!(token = %token, "Dropping recipient without push token prefix");
            }
        }
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the app icon badge count (iOS). Zero is a real value and is sent.
    pub fn with_badge(mut self, count: u32) -> Self {
        self.badge = Some(count);
        self
    }

    /// Replace the auxiliary data delivered to the app
    ///
    /// Expected to be a JSON object keyed by strings; other shapes are
    /// rejected at validation time.
    pub fn with_data(mut self, data: impl Into<Value>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn with_sound(mut self, sound: impl Into<String>) -> Self {
        self.sound = sound.into();
        self
    }

    /// Android notification channel id
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    /// Shorthand for `with_test_mode(true)`
    pub fn test_mode(self) -> Self {
        self.with_test_mode(true)
    }

    /// Toggle test mode
    ///
    /// Enabling appends one synthetic invalid token right away, once per
    /// call, and strips all content from the compiled messages.
    pub fn with_test_mode(mut self, test: bool) -> Self {
        self.test = test;
        if test {
            self.recipients.push(TEST_TOKEN.to_string());
        }
        self
    }

    /// Shorthand for `with_silent_mode(true)`
    pub fn silent_mode(self) -> Self {
        self.with_silent_mode(true)
    }

    /// Silent messages carry badge and data only: no title, body or sound
    pub fn with_silent_mode(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    pub fn recipients(&self) -> &[String] {
        &self.recipients
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn badge(&self) -> Option<u32> {
        self.badge
    }

    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    pub fn sound(&self) -> &str {
        &self.sound
    }

    pub fn channel(&self) -> Option<&str> {
        self.channel.as_deref()
    }

    pub fn is_test(&self) -> bool {
        self.test
    }

    pub fn is_silent(&self) -> bool {
        self.silent
    }
}

impl Default for NotificationRequest {
    fn default() -> Self {
        Self::new()
    }
}

/// Check the literal token prefix required by the gateway
pub fn is_push_token(token: &str) -> bool {
    token.starts_with(TOKEN_PREFIX)
}

/// One or many recipient tokens, normalized to an ordered list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recipients(pub Vec<String>);

impl From<&str> for Recipients {
    fn from(token: &str) -> Self {
        Self(vec![token.to_string()])
    }
}

impl From<String> for Recipients {
    fn from(token: String) -> Self {
        Self(vec![token])
    }
}

impl From<&String> for Recipients {
    fn from(token: &String) -> Self {
        Self(vec![token.clone()])
    }
}

impl From<Vec<String>> for Recipients {
    fn from(tokens: Vec<String>) -> Self {
        Self(tokens)
    }
}

impl From<Vec<&str>> for Recipients {
    fn from(tokens: Vec<&str>) -> Self {
        Self(tokens.into_iter().map(str::to_string).collect())
    }
}

impl From<&[String]> for Recipients {
    fn from(tokens: &[String]) -> Self {
        Self(tokens.to_vec())
    }
}

impl From<&[&str]> for Recipients {
    fn from(tokens: &[&str]) -> Self {
        Self(tokens.iter().map(|t| t.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Recipients {
    fn from(tokens: [&str; N]) -> Self {
        Self(tokens.iter().map(|t| t.to_string()).collect())
    }
}

impl<const N: usize> From<[String; N]> for Recipients {
    fn from(tokens: [String; N]) -> Self {
        Self(tokens.into())
    }
}
