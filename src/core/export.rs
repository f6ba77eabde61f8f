//! Transcript export to a plain-text file.

use std::fs;
use std::io;
use std::path::Path;

use crate::core::message::{self, ChatMessage};

/// Default export filename, written to the current directory.
pub const DEFAULT_FILENAME: &str = "chat_history.txt";

/// Write the transcript as UTF-8 text, atomically (temp file + rename).
/// Returns Ok(false) without writing when there are no messages.
pub fn export_transcript(messages: &[ChatMessage], path: &Path) -> io::Result<bool> {
    if messages.is_empty() {
        return Ok(false);
    }
    let text = message::transcript(messages);
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, text)?;
    fs::rename(tmp, path)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::message::ChatMessage;

    #[test]
    fn exports_one_line_per_message() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let path = dir.path().join(DEFAULT_FILENAME);

        let user = ChatMessage::user("forecast?");
        let mut agent = ChatMessage::agent_placeholder();
        agent.content = "Cloudy".to_string();

        let wrote = export_transcript(&[user.clone(), agent], &path).expect("export");
        assert!(wrote);

        let text = std::fs::read_to_string(&path).expect("read back");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("You: forecast?"));
        assert!(lines[1].ends_with("Agent: Cloudy"));
        assert!(!dir.path().join("chat_history.tmp").exists());
    }

    #[test]
    fn empty_list_writes_nothing() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let path = dir.path().join(DEFAULT_FILENAME);
        let wrote = export_transcript(&[], &path).expect("export");
        assert!(!wrote);
        assert!(!path.exists());
    }
}
