//! Centralized keyboard shortcuts.
//!
//! Complete reference:
//!
//! | Action        | Keys                  |
//! |---------------|-----------------------|
//! | Send          | Enter                 |
//! | Scroll        | ↑ ↓ PageUp PageDown   |
//! | Clear chat    | Ctrl+N                |
//! | Export        | Ctrl+E                |
//! | Search        | Ctrl+F                |
//! | Clear input   | Ctrl+U                |
//! | Copy reply    | Ctrl+Y                |
//! | Toggle theme  | Ctrl+T                |
//! | Cancel        | Esc (while in flight) |
//! | Quit          | Ctrl+C                |

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Detected shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Clear the chat (Ctrl+N)
    ClearChat,
    /// Export the transcript (Ctrl+E)
    Export,
    /// Toggle search focus (Ctrl+F)
    Search,
    /// Clear the focused input buffer (Ctrl+U)
    ClearInput,
    /// Copy the last agent reply (Ctrl+Y)
    CopyReply,
    /// Toggle between the dark and light palettes (Ctrl+T)
    Theme,
    /// Quit (Ctrl+C)
    Quit,
}

impl Shortcut {
    /// Returns the shortcut if the key matches.
    pub fn match_key(key: &KeyEvent) -> Option<Shortcut> {
        if key.kind != KeyEventKind::Press || !key.modifiers.contains(KeyModifiers::CONTROL) {
            return None;
        }
        match key.code {
            KeyCode::Char('c') => Some(Shortcut::Quit),
            KeyCode::Char('n') => Some(Shortcut::ClearChat),
            KeyCode::Char('e') => Some(Shortcut::Export),
            KeyCode::Char('f') => Some(Shortcut::Search),
            KeyCode::Char('u') => Some(Shortcut::ClearInput),
            KeyCode::Char('y') => Some(Shortcut::CopyReply),
            KeyCode::Char('t') => Some(Shortcut::Theme),
            _ => None,
        }
    }

    /// True if key is Escape (cancel in-flight request / leave search).
    pub fn is_escape(key: &KeyEvent) -> bool {
        key.kind == KeyEventKind::Press && key.code == KeyCode::Esc
    }
}

#[cfg(test)]
mod tests {
    use super::Shortcut;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn match_quit_ctrl_c() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Shortcut::Quit)
        );
    }

    #[test]
    fn match_clear_chat_ctrl_n() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('n'), KeyModifiers::CONTROL)),
            Some(Shortcut::ClearChat)
        );
    }

    #[test]
    fn match_export_ctrl_e() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('e'), KeyModifiers::CONTROL)),
            Some(Shortcut::Export)
        );
    }

    #[test]
    fn match_theme_ctrl_t() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('t'), KeyModifiers::CONTROL)),
            Some(Shortcut::Theme)
        );
    }

    #[test]
    fn plain_chars_are_not_shortcuts() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('e'), KeyModifiers::empty())),
            None
        );
    }

    #[test]
    fn key_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Release,
            state: KeyEventState::empty(),
        };
        assert_eq!(Shortcut::match_key(&release), None);
    }

    #[test]
    fn is_escape() {
        assert!(Shortcut::is_escape(&key(KeyCode::Esc, KeyModifiers::empty())));
        assert!(!Shortcut::is_escape(&key(
            KeyCode::Char('c'),
            KeyModifiers::empty()
        )));
    }
}

/// Labels for the bottom bar.
pub mod labels {
    use ratatui::style::Color;
    use ratatui::text::{Line, Span, Text};

    const DIM: Color = Color::DarkGray;

    pub fn bottom_bar(is_sending: bool) -> Text<'static> {
        if is_sending {
            Text::from(Line::from(vec![
                Span::styled("Esc ", Color::Yellow),
                Span::raw("cancel"),
                Span::styled("  ↑↓ ", DIM),
                Span::raw("scroll"),
            ]))
        } else {
            Text::from(Line::from(vec![
                Span::styled("Enter ", DIM),
                Span::raw("send"),
                Span::styled("  Ctrl+F ", DIM),
                Span::raw("search"),
                Span::styled("  Ctrl+E ", DIM),
                Span::raw("export"),
                Span::styled("  Ctrl+N ", DIM),
                Span::raw("clear"),
                Span::styled("  Ctrl+Y ", DIM),
                Span::raw("copy"),
                Span::styled("  Ctrl+T ", DIM),
                Span::raw("theme"),
                Span::styled("  Ctrl+C ", DIM),
                Span::raw("quit"),
            ]))
        }
    }
}
