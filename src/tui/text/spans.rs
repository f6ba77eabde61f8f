//! Builds styled, wrapped display lines from normalized message text.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::core::response::{self, Segment};
use crate::tui::constants::Theme;

use super::highlight_pieces;
use super::wrap::wrap_message;

/// One styled run of a logical line: text plus whether it is bold.
type Run = (String, bool);

/// Turn message text into wrapped display lines of styled spans. Bold is
/// resolved on the whole text before any line breaking, so a `**bold**` pair
/// spanning a wrap boundary keeps its emphasis and never leaks literal
/// markers. Pieces matching `search` get the highlight background.
pub(crate) fn styled_lines(
    text: &str,
    width: usize,
    search: &str,
    theme: Theme,
    base: Style,
) -> Vec<Vec<Span<'static>>> {
    let mut out = Vec::new();
    let mut runs: Vec<Run> = Vec::new();
    for segment in response::segments(text) {
        match segment {
            Segment::Text(t) => runs.push((t, false)),
            Segment::Bold(t) => runs.push((t, true)),
            Segment::LineBreak => {
                wrap_runs(&runs, width, search, theme, base, &mut out);
                runs.clear();
            }
        }
    }
    wrap_runs(&runs, width, search, theme, base, &mut out);
    out
}

/// Wrap one logical line of runs to `width`, mapping each wrapped chunk back
/// to its byte range so the run styling carries across break points.
fn wrap_runs(
    runs: &[Run],
    width: usize,
    search: &str,
    theme: Theme,
    base: Style,
    out: &mut Vec<Vec<Span<'static>>>,
) {
    let plain: String = runs.iter().map(|(t, _)| t.as_str()).collect();
    if plain.is_empty() {
        out.push(vec![Span::styled(String::new(), base)]);
        return;
    }
    let mut cursor = 0;
    for chunk in wrap_message(&plain, width) {
        // Wrapping drops break-point whitespace, so locate the chunk instead
        // of accumulating lengths.
        let start = plain[cursor..]
            .find(chunk.as_str())
            .map(|i| cursor + i)
            .unwrap_or(cursor);
        let end = start + chunk.len();
        out.push(spans_for_range(runs, start, end, search, theme, base));
        cursor = end;
    }
}

/// Spans for the byte range `[start, end)` of the runs' concatenation.
fn spans_for_range(
    runs: &[Run],
    start: usize,
    end: usize,
    search: &str,
    theme: Theme,
    base: Style,
) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut pos = 0;
    for (text, bold) in runs {
        let run_start = pos;
        let run_end = pos + text.len();
        pos = run_end;
        let s = run_start.max(start);
        let e = run_end.min(end);
        if s >= e {
            continue;
        }
        let style = if *bold {
            base.add_modifier(Modifier::BOLD)
        } else {
            base
        };
        push_highlighted(&text[s - run_start..e - run_start], search, theme, style, &mut spans);
    }
    if spans.is_empty() {
        spans.push(Span::styled(String::new(), base));
    }
    spans
}

fn push_highlighted(
    text: &str,
    search: &str,
    theme: Theme,
    style: Style,
    out: &mut Vec<Span<'static>>,
) {
    for (piece, matched) in highlight_pieces(text, search) {
        if piece.is_empty() {
            continue;
        }
        let style = if matched {
            style.bg(theme.highlight_bg()).fg(Color::Black)
        } else {
            style
        };
        out.push(Span::styled(piece.to_string(), style));
    }
}
