//! Header: logo, title, connectivity indicator.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use std::time::Instant;

use crate::core::app as app_meta;

use super::super::app::App;
use super::super::constants::{LOGO_IDLE, LOGO_SENDING};

/// Start time for the spinner animation phase.
static HEADER_START: std::sync::OnceLock<Instant> = std::sync::OnceLock::new();

/// Width reserved for the connectivity indicator (e.g. "● online").
const STATUS_HEADER_WIDTH: u16 = 12;

pub(crate) fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(STATUS_HEADER_WIDTH),
        ])
        .split(area);

    let logo_area = header_chunks[0];
    let status_area = header_chunks[2];

    let logo_symbol = if app.is_sending {
        let start = HEADER_START.get_or_init(Instant::now);
        let phase = start.elapsed().as_millis() as usize;
        LOGO_SENDING[(phase / 120) % LOGO_SENDING.len()]
    } else {
        LOGO_IDLE
    };
    let logo_line = Line::from(Span::styled(
        format!("{} ", logo_symbol),
        Style::default().fg(app.theme.accent()),
    ));
    f.render_widget(Paragraph::new(logo_line), logo_area);

    let title_str = format!("{} ", app_meta::NAME);
    let title_len = title_str.chars().count() as u16;
    let title_area = Rect {
        x: area.x + area.width.saturating_sub(title_len) / 2,
        y: area.y,
        width: title_len.min(area.width),
        height: area.height,
    };
    let title = Line::from(Span::styled(
        title_str,
        Style::default()
            .fg(app.theme.accent())
            .add_modifier(Modifier::BOLD),
    ));
    f.render_widget(Paragraph::new(title), title_area);

    let (status_text, status_color) = if app.connectivity.is_online() {
        ("● online", Color::Green)
    } else {
        ("○ offline", Color::Red)
    };
    let status_line = Line::from(Span::styled(
        status_text,
        Style::default().fg(status_color),
    ));
    f.render_widget(
        Paragraph::new(status_line).alignment(ratatui::layout::Alignment::Right),
        status_area,
    );
}
