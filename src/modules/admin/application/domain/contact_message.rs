use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Unread,
    Read,
    Replied,
}

impl MessageStatus {
    /// The single forward step offered for a message, if any.
    pub fn next(&self) -> Option<MessageStatus> {
        match self {
            MessageStatus::Unread => Some(MessageStatus::Read),
            MessageStatus::Read => Some(MessageStatus::Replied),
            MessageStatus::Replied => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageStatus::Unread => "unread",
            MessageStatus::Read => "read",
            MessageStatus::Replied => "replied",
        }
    }

    /// Button text for moving *into* this status.
    pub fn action_label(&self) -> &'static str {
        match self {
            MessageStatus::Unread => "Mark as Unread",
            MessageStatus::Read => "Mark as Read",
            MessageStatus::Replied => "Mark as Replied",
        }
    }
}

impl fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown message status: {0}")]
pub struct MessageStatusParseError(pub String);

impl FromStr for MessageStatus {
    type Err = MessageStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unread" => Ok(MessageStatus::Unread),
            "read" => Ok(MessageStatus::Read),
            "replied" => Ok(MessageStatus::Replied),
            other => Err(MessageStatusParseError(other.to_string())),
        }
    }
}

/// Contact form submission as listed by `GET /api/contact`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    #[serde(rename = "message")]
    pub body: String,
    pub status: MessageStatus,
    #[serde(with = "crate::shared::timestamp")]
    #[schema(value_type = String, format = DateTime)]
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_moves_forward_only() {
        assert_eq!(MessageStatus::Unread.next(), Some(MessageStatus::Read));
        assert_eq!(MessageStatus::Read.next(), Some(MessageStatus::Replied));
        assert_eq!(MessageStatus::Replied.next(), None);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("READ".parse::<MessageStatus>().unwrap(), MessageStatus::Read);
        assert_eq!(
            "archived".parse::<MessageStatus>(),
            Err(MessageStatusParseError("archived".to_string()))
        );
    }

    #[test]
    fn test_decode_api_message() {
        let raw = json!({
            "id": "5f0c7a52-1c1e-4d8e-9a51-6d4b2f0e9b11",
            "name": "Jane Doe",
            "email": "jane@example.com",
            "subject": "Consulting enquiry",
            "message": "Would you be available next quarter?",
            "timestamp": "2025-03-01T09:30:00.250000",
            "status": "unread",
            "ip_address": "10.0.0.1"
        });

        let message: ContactMessage = serde_json::from_value(raw).unwrap();

        assert_eq!(message.body, "Would you be available next quarter?");
        assert_eq!(message.status, MessageStatus::Unread);
        assert_eq!(message.timestamp.to_rfc3339(), "2025-03-01T09:30:00.250+00:00");
    }
}
