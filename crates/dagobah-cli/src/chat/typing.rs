//! Typewriter rendering for the farewell line.

use std::io::Write;
use std::time::Duration;

/// Pause between characters.
const CHAR_DELAY: Duration = Duration::from_millis(30);

/// Print text one character at a time, flushing after each.
pub async fn type_out(text: &str) {
    let mut out = std::io::stdout();
    for ch in text.chars() {
        let _ = write!(out, "{ch}");
        let _ = out.flush();
        tokio::time::sleep(CHAR_DELAY).await;
    }
}
