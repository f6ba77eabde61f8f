//! TUI constants: color themes, timing, labels.

use ratatui::style::Color;

/// Color palette. Dark is the default; Ctrl+T toggles, `WEATHER_CHAT_THEME`
/// sets the startup value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub(crate) fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Accent for user chrome, title, focused borders.
    pub(crate) fn accent(self) -> Color {
        match self {
            Theme::Dark => Color::Rgb(79, 142, 247),
            Theme::Light => Color::Rgb(37, 99, 235),
        }
    }

    /// Accent for agent blocks and the scrollbar thumb.
    pub(crate) fn accent_secondary(self) -> Color {
        match self {
            Theme::Dark => Color::Rgb(126, 200, 227),
            Theme::Light => Color::Rgb(14, 116, 144),
        }
    }

    /// Background for search-match highlights.
    pub(crate) fn highlight_bg(self) -> Color {
        match self {
            Theme::Dark => Color::Rgb(202, 138, 4),
            Theme::Light => Color::Rgb(253, 224, 71),
        }
    }

    /// De-emphasized chrome: user borders, separators, placeholders.
    pub(crate) fn dim(self) -> Color {
        match self {
            Theme::Dark => Color::DarkGray,
            Theme::Light => Color::Gray,
        }
    }

    /// Foreground for input text.
    pub(crate) fn text(self) -> Color {
        match self {
            Theme::Dark => Color::White,
            Theme::Light => Color::Black,
        }
    }

    /// Opaque surface behind floating widgets (toast).
    pub(crate) fn surface(self) -> Color {
        match self {
            Theme::Dark => Color::Black,
            Theme::Light => Color::White,
        }
    }
}

/// Event poll timeout in milliseconds (main loop).
pub(crate) const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Scroll amount for arrow keys and mouse wheel.
pub(crate) const SCROLL_LINES_SMALL: usize = 3;

/// Scroll amount for PageUp/PageDown.
pub(crate) const SCROLL_LINES_PAGE: usize = 10;

/// Input box height including borders.
pub(crate) const INPUT_LINES: u16 = 3;

/// Minimalist logo when idle (single character).
pub(super) const LOGO_IDLE: &str = "◆";

/// Spinner frames while a send is in flight (braille pattern, 4 frames).
pub(super) const LOGO_SENDING: &[&str] = &["⠋", "⠙", "⠹", "⠸"];

/// Placeholder rendered in the pending agent block.
pub(crate) const TYPING_PLACEHOLDER: &str = "Typing…";

/// How long toasts stay visible.
pub(crate) const TOAST_SECS: u64 = 2;

/// Banner shown when a send is attempted while offline.
pub(crate) const OFFLINE_BANNER: &str = "No internet connection. Check your network and try again.";

#[cfg(test)]
mod tests {
    use super::Theme;

    #[test]
    fn theme_toggle_flips_between_palettes() {
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.label(), "dark");
        assert_eq!(Theme::Light.label(), "light");
        assert_ne!(Theme::Dark.accent(), Theme::Light.accent());
    }
}
