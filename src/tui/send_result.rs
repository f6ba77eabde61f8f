//! Applies a finished send to the app state.

use uuid::Uuid;

use crate::core::agent::AgentError;
use crate::core::bell::Bell;
use crate::core::message::DeliveryStatus;
use crate::core::response;

use super::app::{App, ScrollPosition};

/// Process a send result: fill the agent placeholder, advance the user
/// message's status, ring the bell, or surface the error.
pub(super) fn apply(
    app: &mut App,
    user_id: Uuid,
    agent_id: Uuid,
    result: Result<String, AgentError>,
    bell: &Bell,
) {
    match result {
        Ok(body) => {
            let content = response::display_text_or_placeholder(&body);
            app.set_content(agent_id, content);
            app.set_status(user_id, DeliveryStatus::Delivered);
            app.error = None;
            app.scroll = ScrollPosition::Bottom;
            bell.ring();
        }
        Err(AgentError::Cancelled) => {
            app.set_content(agent_id, "[Request cancelled]".to_string());
            // The send is over; the user message must not look in flight.
            app.set_status(user_id, DeliveryStatus::None);
        }
        Err(e) => {
            let msg = e.to_string();
            app.set_content(agent_id, format!("⚠ Error: {}", msg));
            app.mark_error(agent_id);
            app.error = Some(msg);
            app.scroll = ScrollPosition::Bottom;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> (App, Uuid, Uuid) {
        let mut app = App::new(true);
        let user_id = app.push_user("forecast?");
        let agent_id = app.push_agent_placeholder();
        (app, user_id, agent_id)
    }

    fn silent_bell() -> Bell {
        Bell::new(false)
    }

    #[test]
    fn ok_result_delivers_and_fills_reply() {
        let (mut app, user_id, agent_id) = session();
        apply(
            &mut app,
            user_id,
            agent_id,
            Ok(r#"{"content": "Sunny, 21°C"}"#.to_string()),
            &silent_bell(),
        );
        assert_eq!(app.messages[1].content, "Sunny, 21°C");
        assert_eq!(app.messages[0].status, DeliveryStatus::Delivered);
        assert_eq!(app.error, None);
    }

    #[test]
    fn empty_body_shows_placeholder() {
        let (mut app, user_id, agent_id) = session();
        apply(&mut app, user_id, agent_id, Ok(String::new()), &silent_bell());
        assert_eq!(app.messages[1].content, response::NO_RESPONSE);
    }

    #[test]
    fn error_sets_banner_and_inline_warning() {
        let (mut app, user_id, agent_id) = session();
        apply(
            &mut app,
            user_id,
            agent_id,
            Err(AgentError::Status {
                status: 500,
                reason: "Internal Server Error".to_string(),
            }),
            &silent_bell(),
        );
        assert_eq!(
            app.error.as_deref(),
            Some("API error: 500 Internal Server Error")
        );
        assert!(app.messages[1].content.starts_with("⚠ Error:"));
        assert!(app.messages[1].is_error);
        // The user message never reaches Delivered on failure.
        assert_eq!(app.messages[0].status, DeliveryStatus::Sending);
    }

    #[test]
    fn delivered_reply_is_not_flagged_as_error() {
        let (mut app, user_id, agent_id) = session();
        apply(
            &mut app,
            user_id,
            agent_id,
            Ok(r#"{"content": "⚠ storm surge advisory"}"#.to_string()),
            &silent_bell(),
        );
        assert!(!app.messages[1].is_error);
    }

    #[test]
    fn cancellation_is_a_notice_not_an_error() {
        let (mut app, user_id, agent_id) = session();
        apply(
            &mut app,
            user_id,
            agent_id,
            Err(AgentError::Cancelled),
            &silent_bell(),
        );
        assert_eq!(app.messages[1].content, "[Request cancelled]");
        assert_eq!(app.error, None);
        // The cancelled user message settles instead of staying Sending.
        assert_eq!(app.messages[0].status, DeliveryStatus::None);
    }
}
