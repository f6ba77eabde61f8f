//! Handler for the main input: typing, cursor movement, send, scroll.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyModifiers};
use tokio::runtime::Runtime;

use crate::core::agent::AgentClient;
use crate::core::bell::Bell;

use super::super::app::{App, InputFocus, ScrollPosition};
use super::super::constants;
use super::{HandleResult, PendingSend, send};

/// Handle main input keys (after shortcuts and Esc are dispatched).
#[allow(clippy::too_many_arguments)]
pub(crate) fn handle_main_input(
    key_code: KeyCode,
    key_modifiers: KeyModifiers,
    app: &mut App,
    client: &Arc<AgentClient>,
    pending_send: &mut Option<PendingSend>,
    rt: &Arc<Runtime>,
    bell: &Bell,
) -> HandleResult {
    match key_code {
        KeyCode::Enter => {
            match app.focus {
                // Enter in search mode returns focus to the message input,
                // keeping the query active.
                InputFocus::Search => app.focus = InputFocus::Message,
                InputFocus::Message => try_send(app, client, pending_send, rt, bell),
            }
            HandleResult::Continue
        }
        KeyCode::Backspace => {
            match app.focus {
                InputFocus::Search => {
                    app.search.pop();
                }
                InputFocus::Message => backspace_at_cursor(app),
            }
            HandleResult::Continue
        }
        KeyCode::Left => {
            if app.focus == InputFocus::Message {
                app.input_cursor = prev_char_boundary(&app.input, app.input_cursor);
            }
            HandleResult::Continue
        }
        KeyCode::Right => {
            if app.focus == InputFocus::Message {
                app.input_cursor = next_char_boundary(&app.input, app.input_cursor);
            }
            HandleResult::Continue
        }
        KeyCode::Home => {
            app.input_cursor = 0;
            HandleResult::Continue
        }
        KeyCode::End => {
            app.input_cursor = app.input.len();
            HandleResult::Continue
        }
        KeyCode::Up => {
            app.scroll_up(constants::SCROLL_LINES_SMALL);
            HandleResult::Continue
        }
        KeyCode::Down => {
            app.scroll_down(constants::SCROLL_LINES_SMALL);
            HandleResult::Continue
        }
        KeyCode::PageUp => {
            app.scroll_up(constants::SCROLL_LINES_PAGE);
            HandleResult::Continue
        }
        KeyCode::PageDown => {
            app.scroll_down(constants::SCROLL_LINES_PAGE);
            HandleResult::Continue
        }
        KeyCode::Char(c) => {
            // Ignore Alt+key combinations; they are not text.
            if key_modifiers.contains(KeyModifiers::ALT) {
                return HandleResult::Continue;
            }
            match app.focus {
                InputFocus::Search => app.search.push(c),
                InputFocus::Message => insert_at_cursor(app, c),
            }
            HandleResult::Continue
        }
        _ => HandleResult::Continue,
    }
}

/// Send the trimmed input: guarded against empty text, an outstanding send,
/// and an offline endpoint. Rings the send-side cue once the send is on its
/// way.
fn try_send(
    app: &mut App,
    client: &Arc<AgentClient>,
    pending_send: &mut Option<PendingSend>,
    rt: &Arc<Runtime>,
    bell: &Bell,
) {
    let text = app.input.trim().to_string();
    if text.is_empty() || pending_send.is_some() {
        return;
    }
    if !app.connectivity.is_online() {
        app.error = Some(constants::OFFLINE_BANNER.to_string());
        return;
    }

    app.error = None;
    app.input.clear();
    app.input_cursor = 0;
    let user_id = app.push_user(&text);
    let agent_id = app.push_agent_placeholder();
    app.scroll = ScrollPosition::Bottom;

    *pending_send = Some(send::spawn_send(
        rt,
        Arc::clone(client),
        text,
        user_id,
        agent_id,
    ));
    app.is_sending = true;
    bell.ring();
}

fn insert_at_cursor(app: &mut App, c: char) {
    let cursor = app.input_cursor.min(app.input.len());
    app.input.insert(cursor, c);
    app.input_cursor = cursor + c.len_utf8();
}

fn backspace_at_cursor(app: &mut App) {
    let cursor = app.input_cursor.min(app.input.len());
    if let Some((idx, _)) = app.input[..cursor].char_indices().next_back() {
        app.input.remove(idx);
        app.input_cursor = idx;
    }
}

fn prev_char_boundary(s: &str, cursor: usize) -> usize {
    s[..cursor.min(s.len())]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_char_boundary(s: &str, cursor: usize) -> usize {
    let cursor = cursor.min(s.len());
    s[cursor..]
        .chars()
        .next()
        .map(|c| cursor + c.len_utf8())
        .unwrap_or(cursor)
}
