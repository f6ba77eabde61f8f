//! Search-match splitting for highlight rendering.

use regex::Regex;

/// Split `text` into pieces covering the whole string, marking the pieces
/// that match `needle` case-insensitively. A blank needle yields one
/// unmarked piece.
pub(crate) fn highlight_pieces<'a>(text: &'a str, needle: &str) -> Vec<(&'a str, bool)> {
    if needle.trim().is_empty() || text.is_empty() {
        return vec![(text, false)];
    }
    let Ok(re) = Regex::new(&format!("(?i){}", regex::escape(needle))) else {
        return vec![(text, false)];
    };

    let mut out = Vec::new();
    let mut pos = 0;
    for m in re.find_iter(text) {
        if m.start() > pos {
            out.push((&text[pos..m.start()], false));
        }
        out.push((m.as_str(), true));
        pos = m.end();
    }
    if pos < text.len() {
        out.push((&text[pos..], false));
    }
    if out.is_empty() {
        return vec![(text, false)];
    }
    out
}
