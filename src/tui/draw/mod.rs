//! TUI rendering: layout and widgets for the chat interface.

mod header;
mod history;
mod input;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use std::time::Instant;

use super::app::{App, InputFocus};
use super::constants::INPUT_LINES;

pub(super) fn draw(f: &mut Frame, app: &mut App, area: Rect) {
    let mut input_section_height = INPUT_LINES + 1;
    if app.error.is_some() {
        input_section_height += 1;
    }
    if app.focus == InputFocus::Search {
        input_section_height += INPUT_LINES;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(input_section_height),
        ])
        .split(area);
    header::draw_header(f, app, chunks[0]);
    history::draw_history(f, app, chunks[1]);
    input::draw_input_section(f, app, chunks[2]);

    // Toast: top right, below header. Opaque background so it reads over history.
    if app
        .toast
        .as_ref()
        .is_some_and(|&(_, deadline)| deadline <= Instant::now())
    {
        app.toast = None;
    }
    if let Some((ref text, _)) = app.toast {
        const HEADER_HEIGHT: u16 = 2;
        let toast_text = format!(" {} ", text);
        let toast_width = toast_text.chars().count() as u16 + 2;
        let toast_area = Rect {
            x: area.x + area.width.saturating_sub(toast_width).saturating_sub(1),
            y: area.y + HEADER_HEIGHT,
            width: toast_width.min(area.width),
            height: 3,
        };
        f.render_widget(Clear, toast_area);
        let accent = app.theme.accent();
        let surface = app.theme.surface();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .style(Style::default().bg(surface));
        let para = Paragraph::new(Line::from(toast_text))
            .block(block)
            .style(Style::default().fg(accent).bg(surface));
        f.render_widget(para, toast_area);
    }
}
