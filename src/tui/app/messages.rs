//! Message list mutations: optimistic status updates, placeholder, errors.

use uuid::Uuid;

use crate::core::message::{ChatMessage, DeliveryStatus, Role};

use super::App;

impl App {
    /// Push the user's message (status Sending) and return its id.
    pub(crate) fn push_user(&mut self, text: &str) -> Uuid {
        let msg = ChatMessage::user(text);
        let id = msg.id;
        self.messages.push(msg);
        id
    }

    /// Push the empty agent placeholder that the reply will fill in.
    pub(crate) fn push_agent_placeholder(&mut self) -> Uuid {
        let msg = ChatMessage::agent_placeholder();
        let id = msg.id;
        self.awaiting_reply = Some(id);
        self.messages.push(msg);
        id
    }

    /// Update a message's delivery status. Tolerant of a cleared chat.
    pub(crate) fn set_status(&mut self, id: Uuid, status: DeliveryStatus) {
        if let Some(msg) = self.messages.iter_mut().find(|m| m.id == id) {
            msg.status = status;
        }
    }

    /// Fill in a message's content (the agent placeholder, normally).
    /// Tolerant of a cleared chat.
    pub(crate) fn set_content(&mut self, id: Uuid, content: String) {
        if let Some(msg) = self.messages.iter_mut().find(|m| m.id == id) {
            msg.content = content;
        }
        if self.awaiting_reply == Some(id) {
            self.awaiting_reply = None;
        }
    }

    /// Flag a message's content as a failure notice. Tolerant of a cleared
    /// chat.
    pub(crate) fn mark_error(&mut self, id: Uuid) {
        if let Some(msg) = self.messages.iter_mut().find(|m| m.id == id) {
            msg.is_error = true;
        }
    }

    /// Most recent non-empty agent reply, for clipboard copy.
    pub(crate) fn last_agent_reply(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == Role::Agent && !m.content.is_empty())
            .map(|m| m.content.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(true)
    }

    #[test]
    fn send_flow_status_transitions() {
        let mut app = app();
        let user_id = app.push_user("hi");
        let agent_id = app.push_agent_placeholder();

        assert_eq!(app.messages[0].status, DeliveryStatus::Sending);
        assert_eq!(app.awaiting_reply, Some(agent_id));

        app.set_status(user_id, DeliveryStatus::Sent);
        assert_eq!(app.messages[0].status, DeliveryStatus::Sent);

        app.set_content(agent_id, "Sunny".to_string());
        app.set_status(user_id, DeliveryStatus::Delivered);
        assert_eq!(app.messages[1].content, "Sunny");
        assert_eq!(app.messages[0].status, DeliveryStatus::Delivered);
        assert_eq!(app.awaiting_reply, None);
    }

    #[test]
    fn mutations_tolerate_cleared_chat() {
        let mut app = app();
        let user_id = app.push_user("hi");
        let agent_id = app.push_agent_placeholder();
        app.clear_chat();

        app.set_status(user_id, DeliveryStatus::Sent);
        app.set_content(agent_id, "late reply".to_string());
        assert!(app.messages.is_empty());
    }

    #[test]
    fn only_marked_messages_are_errors() {
        let mut app = app();
        app.push_user("hi");
        let agent_id = app.push_agent_placeholder();

        // A legitimate reply may start with a warning sign; that alone does
        // not make it an error.
        app.set_content(agent_id, "⚠ gale warning in effect".to_string());
        assert!(!app.messages[1].is_error);

        app.mark_error(agent_id);
        assert!(app.messages[1].is_error);
    }

    #[test]
    fn last_agent_reply_skips_placeholder() {
        let mut app = app();
        app.push_user("one");
        let first = app.push_agent_placeholder();
        app.set_content(first, "first reply".to_string());
        app.push_user("two");
        app.push_agent_placeholder();

        assert_eq!(app.last_agent_reply(), Some("first reply"));
    }
}
