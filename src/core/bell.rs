//! Terminal bell cue for incoming replies.

use std::io::Write;

/// Owned audio-cue handle; rings the terminal bell (BEL) when enabled.
/// Constructed once from config and passed to the TUI, which rings it when a
/// reply lands.
#[derive(Debug, Clone, Copy)]
pub struct Bell {
    enabled: bool,
}

impl Bell {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Best-effort; write errors are ignored.
    pub fn ring(&self) {
        if !self.enabled {
            return;
        }
        let mut out = std::io::stdout();
        let _ = out.write_all(b"\x07");
        let _ = out.flush();
    }
}
