//! Chat history: message blocks with borders, delivery status, and scrollbar.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::core::message::{ChatMessage, DeliveryStatus, Role};

use super::super::app::App;
use super::super::constants::{TYPING_PLACEHOLDER, Theme};
use super::super::text::{styled_lines, wrap_message};

/// Repeat a character to fill width (approximate; chars may have different display widths).
fn repeat_char(c: char, n: usize) -> String {
    std::iter::repeat_n(c, n).collect()
}

/// Parameters for rendering a message block.
struct MessageBlockParams<'a> {
    msg: &'a ChatMessage,
    search: &'a str,
    content_width: usize,
    wrap_width: usize,
    show_timestamp: bool,
    theme: Theme,
    /// Render the typing placeholder instead of the (empty) content.
    awaiting: bool,
}

/// Top border: "┌─ You 14:32 Sent ───...──┐". Time and status are optional.
fn top_border(p: &MessageBlockParams<'_>) -> String {
    let mut label = format!("┌─ {}", p.msg.role.speaker());
    if p.show_timestamp {
        label.push_str(&format!(" {}", p.msg.time_label()));
    }
    if p.msg.role == Role::User && p.msg.status != DeliveryStatus::None {
        label.push_str(&format!(" {}", p.msg.status));
    }
    label.push(' ');
    let trail = p.wrap_width.saturating_sub(label.chars().count() + 1);
    format!("{}{}┐", label, repeat_char('─', trail))
}

/// Add one message block: bordered, wrapped, search-highlighted, plus a
/// separator line after. Bold emphasis is resolved before wrapping so a pair
/// crossing a wrap boundary keeps its style.
fn add_message_block(lines: &mut Vec<Line<'static>>, p: MessageBlockParams<'_>) {
    let border_color = match p.msg.role {
        Role::User => p.theme.dim(),
        Role::Agent => p.theme.accent_secondary(),
    };
    let border_style = Style::default().fg(border_color);

    lines.push(Line::from(Span::styled(top_border(&p), border_style)));

    if p.awaiting {
        lines.push(Line::from(vec![
            Span::styled("│ ", border_style),
            Span::styled(
                format!("  {}", TYPING_PLACEHOLDER),
                Style::default()
                    .fg(p.theme.dim())
                    .add_modifier(Modifier::ITALIC),
            ),
        ]));
    } else if p.msg.is_error {
        for content_line in wrap_message(&p.msg.content, p.content_width) {
            lines.push(Line::from(vec![
                Span::styled("│ ", border_style),
                Span::styled("  ", Style::default()),
                Span::styled(content_line, Style::default().fg(Color::Red)),
            ]));
        }
    } else {
        for content_spans in styled_lines(
            &p.msg.content,
            p.content_width,
            p.search,
            p.theme,
            Style::default(),
        ) {
            let mut spans = vec![
                Span::styled("│ ", border_style),
                Span::styled("  ", Style::default()),
            ];
            spans.extend(content_spans);
            lines.push(Line::from(spans));
        }
    }

    let bottom = format!("└{}┘", repeat_char('─', p.wrap_width.saturating_sub(2)));
    lines.push(Line::from(Span::styled(bottom, border_style)));

    lines.push(Line::from(Span::styled(
        repeat_char('─', p.wrap_width),
        Style::default().fg(p.theme.dim()),
    )));
}

pub(crate) fn draw_history(f: &mut Frame, app: &mut App, history_area: Rect) {
    let history_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(history_area);
    let text_area = history_chunks[0];
    let scrollbar_area = history_chunks[1];
    let wrap_width = text_area.width as usize;
    let content_width = wrap_width.saturating_sub(5);
    app.last_content_width = Some(content_width);

    let mut lines: Vec<Line<'static>> = Vec::new();
    for msg in &app.messages {
        add_message_block(
            &mut lines,
            MessageBlockParams {
                msg,
                search: &app.search,
                content_width,
                wrap_width,
                show_timestamp: app.show_timestamps,
                theme: app.theme,
                awaiting: app.awaiting_reply == Some(msg.id),
            },
        );
    }

    let total_lines = lines.len();
    let visible = text_area.height as usize;
    let max_scroll = total_lines.saturating_sub(visible.max(1));
    app.last_max_scroll = max_scroll;
    let scroll_pos = app.scroll_line().min(max_scroll);
    let start = scroll_pos;
    let end = (start + visible).min(total_lines);
    let visible_lines: Vec<Line> = lines.into_iter().skip(start).take(end - start).collect();

    f.render_widget(Paragraph::new(visible_lines), text_area);

    let mut scrollbar_state = ScrollbarState::default()
        .position(scroll_pos)
        .content_length(total_lines);
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .thumb_symbol("█")
        .thumb_style(Style::default().fg(app.theme.accent_secondary()))
        .track_symbol(Some("│"));
    f.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
}
