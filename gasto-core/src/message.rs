//! Raw messages handed to the engine by the SMS receiver or notification listener.

use serde::{Deserialize, Serialize};

/// Where a message was observed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Channel {
    #[default]
    #[serde(rename = "sms")]
    Sms,
    #[serde(rename = "notification")]
    Notification,
}

/// One observed SMS or notification; owned by the caller, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IncomingMessage {
    /// SMS originating address, or the notification title
    #[serde(default)]
    pub sender_or_title: String,
    pub body: String,
    #[serde(default)]
    pub channel: Channel,
}

impl IncomingMessage {
    pub fn sms(sender: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            sender_or_title: sender.into(),
            body: body.into(),
            channel: Channel::Sms,
        }
    }

    pub fn notification(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            sender_or_title: title.into(),
            body: body.into(),
            channel: Channel::Notification,
        }
    }

    /// Reassemble a multipart SMS. Segments are concatenated in delivery order
    /// with no separator; the sender is the same for every segment.
    pub fn sms_from_parts<S: AsRef<str>>(sender: impl Into<String>, parts: &[S]) -> Self {
        let body: String = parts.iter().map(|p| p.as_ref()).collect();
        Self::sms(sender, body)
    }
}

/// Package substring a notification must carry to be considered; an empty
/// filter accepts every package.
pub const DEFAULT_PACKAGE_FILTER: &str = "savemoney";

/// Fields of a posted notification relevant to extraction
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub package: String,
    pub title: Option<String>,
    pub text: Option<String>,
    /// Expanded text; preferred over `text` when present
    pub big_text: Option<String>,
}

impl Notification {
    /// Best available body: `big_text`, falling back to `text`
    pub fn body(&self) -> Option<&str> {
        self.big_text.as_deref().or(self.text.as_deref())
    }

    /// Whether the posting package contains `package_filter`
    pub fn is_from(&self, package_filter: &str) -> bool {
        self.package.contains(package_filter)
    }

    /// Convert into an engine input. `None` when the posting package does not
    /// contain `package_filter` or the notification carries no text.
    pub fn into_message(self, package_filter: &str) -> Option<IncomingMessage> {
        if !self.is_from(package_filter) {
            return None;
        }
        let Notification {
            title,
            text,
            big_text,
            ..
        } = self;
        let body = big_text.or(text)?;
        Some(IncomingMessage::notification(title.unwrap_or_default(), body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sms_from_parts_concatenates_in_order() {
        let msg = IncomingMessage::sms_from_parts(
            "27888",
            &["BRADESCO CARTOES: COMPRA APROVADA ", "NO CARTAO FINAL 7904"],
        );
        assert_eq!(msg.channel, Channel::Sms);
        assert_eq!(msg.sender_or_title, "27888");
        assert_eq!(msg.body, "BRADESCO CARTOES: COMPRA APROVADA NO CARTAO FINAL 7904");
    }

    #[test]
    fn test_notification_prefers_big_text() {
        let n = Notification {
            package: "com.savemoney.bank".into(),
            title: Some("Conta".into()),
            text: Some("PIX recebido...".into()),
            big_text: Some("PIX recebido em 19/09/2025 as 16:09 no valor de R$ 0,14.".into()),
        };
        assert_eq!(n.body(), n.big_text.as_deref());
        let msg = n.into_message(DEFAULT_PACKAGE_FILTER).unwrap();
        assert_eq!(msg.channel, Channel::Notification);
        assert_eq!(msg.sender_or_title, "Conta");
        assert!(msg.body.ends_with("R$ 0,14."));
    }

    #[test]
    fn test_notification_without_text_is_dropped() {
        let n = Notification {
            package: "com.savemoney.bank".into(),
            title: Some("Conta".into()),
            ..Default::default()
        };
        assert!(n.into_message(DEFAULT_PACKAGE_FILTER).is_none());
    }

    #[test]
    fn test_foreign_package_is_ignored() {
        let n = Notification {
            package: "com.whatsapp".into(),
            title: Some("Conta".into()),
            text: Some("PIX recebido em 19/09/2025 as 16:09 no valor de R$ 0,14.".into()),
            big_text: None,
        };
        assert!(!n.is_from(DEFAULT_PACKAGE_FILTER));
        assert!(n.clone().into_message(DEFAULT_PACKAGE_FILTER).is_none());
        // an empty filter lets any package through
        assert!(n.into_message("").is_some());
    }

    #[test]
    fn test_message_json_defaults_to_sms() {
        let msg: IncomingMessage = serde_json::from_str(r#"{"body": "oi"}"#).unwrap();
        assert_eq!(msg.channel, Channel::Sms);
        assert_eq!(msg.sender_or_title, "");

        let msg: IncomingMessage =
            serde_json::from_str(r#"{"sender_or_title": "Conta", "body": "oi", "channel": "notification"}"#)
                .unwrap();
        assert_eq!(msg.channel, Channel::Notification);
    }
}
