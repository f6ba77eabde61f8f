//! Chat messages: roles, delivery status, transcript formatting.

use chrono::{DateTime, Local};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Agent,
}

impl Role {
    /// Speaker label used in transcripts and message blocks.
    pub fn speaker(self) -> &'static str {
        match self {
            Role::User => "You",
            Role::Agent => "Agent",
        }
    }
}

/// Delivery progress of a message. Only user messages display theirs:
/// Sending on push, Sent when the endpoint accepts, Delivered once the reply
/// is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeliveryStatus {
    Sending,
    Sent,
    Delivered,
    #[default]
    None,
}

impl std::fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            DeliveryStatus::Sending => "Sending",
            DeliveryStatus::Sent => "Sent",
            DeliveryStatus::Delivered => "Delivered",
            DeliveryStatus::None => "",
        };
        write!(f, "{}", label)
    }
}

/// One message in the session. Created on send, mutated in place as delivery
/// progresses, never persisted beyond the session.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Local>,
    pub status: DeliveryStatus,
    /// Set when the content is a failure notice rather than agent output.
    /// Rendering keys off this, not off the content text.
    pub is_error: bool,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::User,
            content: content.into(),
            timestamp: Local::now(),
            status: DeliveryStatus::Sending,
            is_error: false,
        }
    }

    /// Empty agent message shown as a typing placeholder until the reply lands.
    pub fn agent_placeholder() -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::Agent,
            content: String::new(),
            timestamp: Local::now(),
            status: DeliveryStatus::None,
            is_error: false,
        }
    }

    /// HH:MM local time shown next to the label.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }

    /// One transcript line: `[HH:MM] You: content`.
    pub fn transcript_line(&self) -> String {
        format!(
            "[{}] {}: {}",
            self.time_label(),
            self.role.speaker(),
            self.content
        )
    }
}

/// Serialize the message list for export, one line per message.
pub fn transcript(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .map(ChatMessage::transcript_line)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, min: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2026, 8, 25, hour, min, 0)
            .single()
            .expect("valid local time")
    }

    #[test]
    fn transcript_line_format() {
        let mut msg = ChatMessage::user("weather in Paris?");
        msg.timestamp = at(14, 32);
        assert_eq!(msg.transcript_line(), "[14:32] You: weather in Paris?");
    }

    #[test]
    fn transcript_joins_messages_with_newlines() {
        let mut user = ChatMessage::user("hi");
        user.timestamp = at(9, 5);
        let mut agent = ChatMessage::agent_placeholder();
        agent.content = "Sunny".to_string();
        agent.timestamp = at(9, 6);

        assert_eq!(
            transcript(&[user, agent]),
            "[09:05] You: hi\n[09:06] Agent: Sunny"
        );
    }

    #[test]
    fn user_messages_start_in_sending() {
        assert_eq!(ChatMessage::user("x").status, DeliveryStatus::Sending);
        assert_eq!(
            ChatMessage::agent_placeholder().status,
            DeliveryStatus::None
        );
    }

    #[test]
    fn status_labels() {
        assert_eq!(DeliveryStatus::Sending.to_string(), "Sending");
        assert_eq!(DeliveryStatus::Delivered.to_string(), "Delivered");
        assert_eq!(DeliveryStatus::None.to_string(), "");
    }
}
