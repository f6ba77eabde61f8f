//! TUI application state: messages, input, scroll, search, connectivity.

mod messages;

use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::core::connectivity::Connectivity;
use crate::core::message::ChatMessage;

use super::constants::{self, Theme};

/// Scroll position: either a specific line index, or "at bottom" (follow new content).
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ScrollPosition {
    Line(usize),
    Bottom,
}

impl Default for ScrollPosition {
    fn default() -> Self {
        Self::Line(0)
    }
}

/// Which buffer consumes typed characters.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum InputFocus {
    Message,
    Search,
}

pub struct App {
    pub(crate) messages: Vec<ChatMessage>,
    /// User input in the text field.
    pub(crate) input: String,
    /// Cursor position in the input (byte index; Left/Right, insert, Backspace).
    pub(crate) input_cursor: usize,
    /// Search query; matches are highlighted in the history.
    pub(crate) search: String,
    pub(crate) focus: InputFocus,
    pub(crate) scroll: ScrollPosition,
    pub(crate) last_max_scroll: usize,
    /// Content width from last draw; kept for scroll math on resize.
    pub(crate) last_content_width: Option<usize>,
    /// Banner shown above the input on request failure or offline send.
    pub(crate) error: Option<String>,
    pub(crate) connectivity: Connectivity,
    /// When the last probe completed; drives the re-probe interval.
    pub(crate) last_probe_at: Option<Instant>,
    /// True while a send is in flight (spinner, cancel hint, send guard).
    pub(crate) is_sending: bool,
    /// Id of the agent placeholder currently awaiting a reply.
    pub(crate) awaiting_reply: Option<Uuid>,
    /// Toast text shown until the instant elapses.
    pub(crate) toast: Option<(String, Instant)>,
    pub(crate) show_timestamps: bool,
    /// Active color palette; Ctrl+T toggles.
    pub(crate) theme: Theme,
}

impl App {
    pub fn new(show_timestamps: bool) -> Self {
        Self {
            messages: vec![],
            input: String::new(),
            input_cursor: 0,
            search: String::new(),
            focus: InputFocus::Message,
            scroll: ScrollPosition::default(),
            last_max_scroll: 0,
            last_content_width: None,
            error: None,
            connectivity: Connectivity::default(),
            last_probe_at: None,
            is_sending: false,
            awaiting_reply: None,
            toast: None,
            show_timestamps,
            theme: Theme::Dark,
        }
    }

    /// Reset to an empty session (Ctrl+N).
    pub(crate) fn clear_chat(&mut self) {
        self.messages.clear();
        self.error = None;
        self.awaiting_reply = None;
        self.scroll = ScrollPosition::default();
        self.last_max_scroll = 0;
    }

    pub(crate) fn set_toast(&mut self, text: impl Into<String>) {
        self.toast = Some((
            text.into(),
            Instant::now() + Duration::from_secs(constants::TOAST_SECS),
        ));
    }

    /// Must be called before scroll_up/scroll_down when at bottom.
    pub(crate) fn materialize_scroll(&mut self) {
        if self.scroll == ScrollPosition::Bottom {
            self.scroll = ScrollPosition::Line(self.last_max_scroll);
        }
    }

    pub(crate) fn scroll_down(&mut self, n: usize) {
        self.materialize_scroll();
        if let ScrollPosition::Line(pos) = self.scroll {
            self.scroll = ScrollPosition::Line((pos + n).min(self.last_max_scroll));
        }
    }

    pub(crate) fn scroll_up(&mut self, n: usize) {
        self.materialize_scroll();
        if let ScrollPosition::Line(pos) = self.scroll {
            self.scroll = ScrollPosition::Line(pos.saturating_sub(n));
        }
    }

    /// Resolve scroll position to a concrete line index.
    pub(crate) fn scroll_line(&self) -> usize {
        match self.scroll {
            ScrollPosition::Line(n) => n.min(self.last_max_scroll),
            ScrollPosition::Bottom => self.last_max_scroll,
        }
    }
}
