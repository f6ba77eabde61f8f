//! Event handlers for the TUI: keyboard and mouse.

mod input;
mod send;

use std::path::Path;
use std::sync::Arc;

use crossterm::event::{KeyEventKind, MouseEventKind};
use tokio::runtime::Runtime;

use crate::core::agent::AgentClient;
use crate::core::bell::Bell;
use crate::core::export;

use super::app::{App, InputFocus};
use super::constants;
use super::shortcuts::Shortcut;

pub use send::PendingSend;

/// Result of handling an event: continue the loop or exit.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum HandleResult {
    Continue,
    Break,
}

/// Handle a mouse event (wheel scroll only).
pub fn handle_mouse(mouse: crossterm::event::MouseEvent, app: &mut App) -> HandleResult {
    match mouse.kind {
        MouseEventKind::ScrollUp => app.scroll_up(constants::SCROLL_LINES_SMALL),
        MouseEventKind::ScrollDown => app.scroll_down(constants::SCROLL_LINES_SMALL),
        _ => {}
    }
    HandleResult::Continue
}

/// Context for key event handling. Bundles mutable state to reduce parameter count.
pub struct HandleKeyContext<'a> {
    pub app: &'a mut App,
    pub client: &'a Arc<AgentClient>,
    pub pending_send: &'a mut Option<PendingSend>,
    pub rt: &'a Arc<Runtime>,
    pub bell: &'a Bell,
}

/// Handle a key event. Returns HandleResult::Break to exit the main loop.
pub fn handle_key(key: crossterm::event::KeyEvent, ctx: HandleKeyContext<'_>) -> HandleResult {
    let HandleKeyContext {
        app,
        client,
        pending_send,
        rt,
        bell,
    } = ctx;

    if key.kind != KeyEventKind::Press {
        return HandleResult::Continue;
    }

    if let Some(shortcut) = Shortcut::match_key(&key) {
        return handle_shortcut(shortcut, app, pending_send);
    }

    // Esc: leave search mode, else cancel the in-flight request.
    if Shortcut::is_escape(&key) {
        if app.focus == InputFocus::Search {
            app.focus = InputFocus::Message;
            app.search.clear();
            return HandleResult::Continue;
        }
        if let Some(pending) = pending_send.as_ref() {
            pending.cancel_token.cancel();
        }
        return HandleResult::Continue;
    }

    input::handle_main_input(key.code, key.modifiers, app, client, pending_send, rt, bell)
}

fn handle_shortcut(
    shortcut: Shortcut,
    app: &mut App,
    pending_send: &mut Option<PendingSend>,
) -> HandleResult {
    match shortcut {
        Shortcut::Quit => return HandleResult::Break,
        Shortcut::ClearChat => {
            // Cancel first so a late reply cannot land in the fresh session.
            if let Some(pending) = pending_send.as_ref() {
                pending.cancel_token.cancel();
            }
            app.clear_chat();
        }
        Shortcut::Export => export_transcript(app),
        Shortcut::Search => {
            app.focus = match app.focus {
                InputFocus::Search => InputFocus::Message,
                InputFocus::Message => InputFocus::Search,
            };
        }
        Shortcut::ClearInput => match app.focus {
            InputFocus::Search => app.search.clear(),
            InputFocus::Message => {
                app.input.clear();
                app.input_cursor = 0;
            }
        },
        Shortcut::CopyReply => copy_last_reply(app),
        Shortcut::Theme => {
            app.theme = app.theme.toggle();
            app.set_toast(format!("Theme: {}", app.theme.label()));
        }
    }
    HandleResult::Continue
}

fn export_transcript(app: &mut App) {
    match export::export_transcript(&app.messages, Path::new(export::DEFAULT_FILENAME)) {
        Ok(true) => app.set_toast(format!("Exported {}", export::DEFAULT_FILENAME)),
        Ok(false) => app.set_toast("Nothing to export"),
        Err(e) => {
            log::warn!("transcript export failed: {}", e);
            app.set_toast("Export failed");
        }
    }
}

fn copy_last_reply(app: &mut App) {
    let Some(reply) = app.last_agent_reply().map(str::to_string) else {
        return;
    };
    if arboard::Clipboard::new()
        .and_then(|mut c| c.set_text(reply))
        .is_ok()
    {
        app.set_toast("Copied");
    }
}
