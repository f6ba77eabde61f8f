//! Agent response decoding: payload classification, text formatting, and the
//! rich-text segment model the renderer consumes.
//!
//! The endpoint gives no schema guarantee: a reply may be a JSON string, an
//! object carrying `content` (possibly under `message`), a concatenated
//! `index:"fragment"` token stream, or arbitrary text. Everything here is
//! best-effort; a parse failure is never an error, it just falls through to
//! the next shape.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

/// Shown in place of a reply that normalizes to nothing.
pub const NO_RESPONSE: &str = "(no response)";

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\d+:"([^"]*)""#).expect("token pattern compiles"));
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern compiles"));
static SPACE_BEFORE_PUNCT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s([.,!?;:])").expect("punctuation pattern compiles"));

/// Recognized shapes of a raw agent response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponsePayload {
    /// JSON-encoded bare string.
    BareString(String),
    /// JSON object with a string `content` field.
    Content(String),
    /// JSON object with a string `message.content` field.
    NestedContent(String),
    /// `<digits>:"fragment"` tokens, collected in order of appearance.
    TokenStream(Vec<String>),
    /// Anything else; formatted as plain text.
    Opaque(String),
}

/// Classify a raw body into one of the recognized shapes. First match wins
/// for the JSON shapes; a JSON value without a recognized field (number,
/// bool, array, object with non-string `content`) falls through carrying the
/// original raw text, not the parsed value's rendering.
pub fn classify(raw: &str) -> ResponsePayload {
    if let Ok(value) = serde_json::from_str::<Value>(raw) {
        if let Value::String(s) = value {
            return ResponsePayload::BareString(s);
        }
        if let Some(s) = value.get("content").and_then(Value::as_str) {
            return ResponsePayload::Content(s.to_string());
        }
        if let Some(s) = value
            .get("message")
            .and_then(|m| m.get("content"))
            .and_then(Value::as_str)
        {
            return ResponsePayload::NestedContent(s.to_string());
        }
    }

    let tokens: Vec<String> = TOKEN_RE
        .captures_iter(raw)
        .map(|c| c[1].to_string())
        .collect();
    if !tokens.is_empty() {
        return ResponsePayload::TokenStream(tokens);
    }

    ResponsePayload::Opaque(raw.to_string())
}

impl ResponsePayload {
    /// Resolve to display text. JSON-carried content passes through
    /// untouched; token streams and opaque text go through [`format_text`].
    pub fn into_display_text(self) -> String {
        match self {
            ResponsePayload::BareString(s)
            | ResponsePayload::Content(s)
            | ResponsePayload::NestedContent(s) => s,
            ResponsePayload::TokenStream(tokens) => format_text(&tokens.join(" ")),
            ResponsePayload::Opaque(s) => format_text(&s),
        }
    }
}

/// Normalize a raw response body into display text. Never fails.
pub fn display_text(raw: &str) -> String {
    classify(raw).into_display_text()
}

/// Normalize, substituting [`NO_RESPONSE`] when nothing usable remains.
pub fn display_text_or_placeholder(raw: &str) -> String {
    let text = display_text(raw);
    if text.trim().is_empty() {
        NO_RESPONSE.to_string()
    } else {
        text
    }
}

/// Formatting transforms, in pipeline order: literal `\n` escapes become
/// newlines, whitespace runs collapse to one space, spaces before closing
/// punctuation are dropped, then trim. Idempotent.
pub fn format_text(text: &str) -> String {
    let text = text.replace("\\n", "\n");
    let text = WHITESPACE_RE.replace_all(&text, " ");
    let text = SPACE_BEFORE_PUNCT_RE.replace_all(&text, "$1");
    // Second escape pass. The first pass consumes every literal escape and
    // the collapse cannot reintroduce one, so this is a no-op kept for
    // pipeline compatibility.
    let text = text.replace("\\n", "\n");
    text.trim().to_string()
}

/// Rich-text display model: plain runs, bold runs, explicit line breaks.
/// This is the bold-emphasis / line-break marker layer; no markup strings
/// ever appear in message content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Bold(String),
    LineBreak,
}

/// Split display text into segments. `**text**` pairs become [`Segment::Bold`]
/// (non-greedy, first pair wins); unmatched markers stay literal; newline
/// characters become [`Segment::LineBreak`].
pub fn segments(text: &str) -> Vec<Segment> {
    let mut out = Vec::new();
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push(Segment::LineBreak);
        }
        segment_line(line, &mut out);
    }
    out
}

fn segment_line(line: &str, out: &mut Vec<Segment>) {
    let mut rest = line;
    while !rest.is_empty() {
        let Some(start) = rest.find("**") else {
            out.push(Segment::Text(rest.to_string()));
            break;
        };
        let after = &rest[start + 2..];
        match after.find("**") {
            Some(end) => {
                if start > 0 {
                    out.push(Segment::Text(rest[..start].to_string()));
                }
                out.push(Segment::Bold(after[..end].to_string()));
                rest = &after[end + 2..];
            }
            None => {
                // Unpaired marker: keep the rest literal.
                out.push(Segment::Text(rest.to_string()));
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_json_string_returned_verbatim() {
        // No formatting applies to JSON-carried strings, spacing included.
        assert_eq!(display_text(r#""hello world""#), "hello world");
        assert_eq!(display_text(r#""  spaced  .  ""#), "  spaced  .  ");
    }

    #[test]
    fn content_field_returned_verbatim() {
        assert_eq!(
            display_text(r#"{"content": "Sunny, 21°C"}"#),
            "Sunny, 21°C"
        );
    }

    #[test]
    fn nested_message_content_returned_verbatim() {
        assert_eq!(
            display_text(r#"{"message": {"content": "Rain expected"}}"#),
            "Rain expected"
        );
    }

    #[test]
    fn top_level_content_wins_over_nested() {
        let raw = r#"{"content": "outer", "message": {"content": "inner"}}"#;
        assert_eq!(display_text(raw), "outer");
    }

    #[test]
    fn empty_content_string_short_circuits() {
        assert_eq!(classify(r#"{"content": ""}"#), ResponsePayload::Content(String::new()));
    }

    #[test]
    fn token_stream_joined_with_spaces() {
        assert_eq!(display_text(r#"0:"Hello" 1:"world""#), "Hello world");
    }

    #[test]
    fn token_stream_without_separators() {
        assert_eq!(display_text(r#"0:"It is"1:"windy""#), "It is windy");
    }

    #[test]
    fn json_number_falls_through_to_raw_text() {
        // Parses as JSON, but not a recognized shape: format the raw text.
        assert_eq!(display_text("42"), "42");
        assert_eq!(classify("42"), ResponsePayload::Opaque("42".to_string()));
    }

    #[test]
    fn non_string_content_falls_through_to_raw_text() {
        let raw = r#"{"content": 5}"#;
        // The parsed value's rendering ("5") must not leak out.
        assert_eq!(display_text(raw), r#"{"content": 5}"#);
    }

    #[test]
    fn json_array_falls_through() {
        assert_eq!(display_text("[1, 2]"), "[1, 2]");
    }

    #[test]
    fn plain_text_unchanged() {
        assert_eq!(display_text("plain text"), "plain text");
    }

    #[test]
    fn whitespace_collapsed_and_punctuation_tightened() {
        assert_eq!(display_text("Hi   there , friend"), "Hi there, friend");
    }

    #[test]
    fn escaped_newlines_become_whitespace_run() {
        // \n escapes turn into real newlines, which the collapse then folds.
        assert_eq!(format_text("line one\\n\\nline two"), "line one line two");
    }

    #[test]
    fn formatting_is_idempotent() {
        for raw in [
            "Hi   there , friend",
            "line one\\n\\nline two",
            "**bold** text",
            "  padded  ",
            "plain text",
        ] {
            let once = format_text(raw);
            assert_eq!(format_text(&once), once, "input: {raw:?}");
        }
    }

    #[test]
    fn display_text_idempotent_on_plain_text() {
        let once = display_text("plain text");
        assert_eq!(display_text(&once), once);
    }

    #[test]
    fn empty_token_capture_set_leaves_text_alone() {
        // A colon and quotes alone do not match; text survives untouched.
        assert_eq!(display_text(r#"note: "quoted" text"#), r#"note: "quoted" text"#);
    }

    #[test]
    fn placeholder_for_empty_reply() {
        assert_eq!(display_text_or_placeholder(r#""""#), NO_RESPONSE);
        assert_eq!(display_text_or_placeholder("   "), NO_RESPONSE);
    }

    #[test]
    fn bold_pair_becomes_bold_segment() {
        assert_eq!(
            segments("**bold** text"),
            vec![
                Segment::Bold("bold".to_string()),
                Segment::Text(" text".to_string()),
            ]
        );
    }

    #[test]
    fn bold_is_non_greedy_first_pair_wins() {
        assert_eq!(
            segments("**a** and **b**"),
            vec![
                Segment::Bold("a".to_string()),
                Segment::Text(" and ".to_string()),
                Segment::Bold("b".to_string()),
            ]
        );
    }

    #[test]
    fn unmatched_markers_stay_literal() {
        assert_eq!(
            segments("a ** b"),
            vec![Segment::Text("a ** b".to_string())]
        );
        assert_eq!(
            segments("*single* stars"),
            vec![Segment::Text("*single* stars".to_string())]
        );
    }

    #[test]
    fn triple_asterisks_match_like_the_original() {
        // ***x*** pairs greedily from the left: bold("*x"), trailing "*".
        assert_eq!(
            segments("***x***"),
            vec![
                Segment::Bold("*x".to_string()),
                Segment::Text("*".to_string()),
            ]
        );
    }

    #[test]
    fn newlines_in_passthrough_content_become_line_breaks() {
        // JSON-carried content skips formatting, so newlines survive here.
        assert_eq!(
            segments("today\ntomorrow"),
            vec![
                Segment::Text("today".to_string()),
                Segment::LineBreak,
                Segment::Text("tomorrow".to_string()),
            ]
        );
    }
}
