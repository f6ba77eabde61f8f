//! Input section: error banner, search box, message input, bottom bar.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::super::app::{App, InputFocus};
use super::super::constants::INPUT_LINES;
use super::super::shortcuts;

fn truncate_with_ellipsis(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        format!(
            "{}…",
            s.chars()
                .take(max_width.saturating_sub(1))
                .collect::<String>()
        )
    }
}

fn wrapped_lines(text: &str, width: u16) -> Vec<String> {
    if width == 0 {
        return vec![];
    }
    textwrap::wrap(text, width as usize)
        .into_iter()
        .map(|s| s.into_owned())
        .collect()
}

pub(crate) fn draw_input_section(f: &mut Frame, app: &mut App, input_section: Rect) {
    let has_error = app.error.is_some();
    let in_search = app.focus == InputFocus::Search;

    let mut constraints = Vec::new();
    if has_error {
        constraints.push(Constraint::Length(1));
    }
    if in_search {
        constraints.push(Constraint::Length(INPUT_LINES));
    }
    constraints.push(Constraint::Length(INPUT_LINES));
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(input_section);

    let mut idx = 0;
    if has_error {
        draw_error_banner(f, app, chunks[idx]);
        idx += 1;
    }
    if in_search {
        draw_search_box(f, app, chunks[idx]);
        idx += 1;
    }
    draw_input_block(f, app, chunks[idx]);
    draw_bottom_bar(f, app, chunks[idx + 1]);
}

fn draw_error_banner(f: &mut Frame, app: &App, area: Rect) {
    let Some(ref err) = app.error else {
        return;
    };
    let line = Line::from(Span::styled(
        truncate_with_ellipsis(err, area.width as usize),
        Style::default().fg(Color::Red),
    ));
    f.render_widget(Paragraph::new(line), area);
}

fn draw_search_box(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.accent()))
        .title(" Search ");
    let content = if app.search.is_empty() {
        Span::styled("Highlight matches…", Style::default().fg(app.theme.dim()))
    } else {
        Span::raw(app.search.as_str())
    };
    let inner = block.inner(area);
    f.render_widget(
        Paragraph::new(Line::from(content))
            .block(block)
            .style(Style::default().fg(app.theme.text())),
        area,
    );
    let cx = inner.x + (app.search.chars().count() as u16).min(inner.width.saturating_sub(1));
    f.set_cursor_position(Position::new(cx, inner.y));
}

fn draw_input_block(f: &mut Frame, app: &mut App, input_area: Rect) {
    let border_style = if app.focus == InputFocus::Message {
        Style::default().fg(app.theme.accent())
    } else {
        Style::default().fg(app.theme.dim())
    };
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = input_block.inner(input_area);
    let inner_height = inner.height as usize;

    let input_content = if app.input.is_empty() {
        Span::styled(
            "Ask about the weather... ",
            Style::default().fg(app.theme.dim()),
        )
    } else {
        Span::raw(app.input.as_str())
    };

    let para = Paragraph::new(Line::from(input_content))
        .block(input_block)
        .style(Style::default().fg(app.theme.text()))
        .wrap(Wrap { trim: true });

    let lines = wrapped_lines(app.input.as_str(), inner.width);
    let total_lines = lines.len().max(1);

    // Must be at a char boundary or str[..n] panics (multi-byte chars).
    let cursor_byte = app
        .input
        .floor_char_boundary(app.input_cursor.min(app.input.len()));
    let cursor_char_offset = app.input[..cursor_byte].chars().count();
    let (cursor_line, cursor_col) = {
        let mut idx = 0;
        let mut found = (0, 0);
        for (i, line) in lines.iter().enumerate() {
            let len = line.chars().count();
            if cursor_char_offset <= idx + len {
                found = (i, (cursor_char_offset - idx).min(len));
                break;
            }
            idx += len;
        }
        if cursor_char_offset >= idx {
            let last = lines.last().map(|s| s.chars().count()).unwrap_or(0);
            found = (total_lines.saturating_sub(1), last);
        }
        found
    };
    let scroll_y = cursor_line
        .saturating_sub(inner_height.saturating_sub(1))
        .min(total_lines.saturating_sub(inner_height));
    let para = para.scroll((scroll_y as u16, 0));

    f.render_widget(para, input_area);

    if app.focus == InputFocus::Message {
        let cursor_row_in_view = cursor_line.saturating_sub(scroll_y);
        let cx = inner.x + cursor_col.min(inner.width as usize) as u16;
        let cy = inner.y + cursor_row_in_view as u16;
        f.set_cursor_position(Position::new(cx, cy));
    }
}

fn draw_bottom_bar(f: &mut Frame, app: &App, area: Rect) {
    let labels = shortcuts::labels::bottom_bar(app.is_sending);
    f.render_widget(
        Paragraph::new(labels).alignment(ratatui::layout::Alignment::Right),
        area,
    );
}
