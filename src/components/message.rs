// Wire message compilation: one gateway message per recipient token
// Test mode strips everything; silent mode keeps only badge and data

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::validation::is_empty_data;
use super::{NotificationRequest, NotificationResult};

/// Single message in the outgoing batch
///
/// `to` and `sound` are always serialized; `sound` is `null` for test and
/// silent messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireMessage {
    pub to: String,
    pub sound: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(
        rename = "channelId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub channel_id: Option<String>,
}

impl WireMessage {
    /// Content-free message addressed to `token`
    pub fn bare(token: impl Into<String>) -> Self {
        Self {
            to: token.into(),
            sound: None,
            badge: None,
            data: None,
            title: None,
            body: None,
            channel_id: None,
        }
    }

    /// Build the message for one recipient of `request`
    pub fn for_recipient(request: &NotificationRequest, token: &str) -> Self {
        let mut message = Self::bare(token);

        if request.is_test() {
            return message;
        }

        message.badge = request.badge();
        message.data = request.data().filter(|data| !is_empty_data(data)).cloned();

        if request.is_silent() {
            return message;
        }

        message.title = non_empty(request.title());
        message.body = non_empty(request.body());
        message.sound = Some(request.sound().to_string());
        message.channel_id = non_empty(request.channel());

        message
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

/// Expand a request into one message per recipient, in recipient order
pub fn compile(request: &NotificationRequest) -> Vec<WireMessage> {
    request
        .recipients()
        .iter()
        .map(|token| WireMessage::for_recipient(request, token))
        .collect()
}

/// Compile and encode the batch body posted to the gateway
pub fn compile_batch(request: &NotificationRequest) -> NotificationResult<String> {
    Ok(serde_json::to_string(&compile(request))?)
}
