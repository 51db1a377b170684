//! Screen text composition for the 16x2 character display
//!
//! Every line is padded or truncated to the full column width before
//! it goes to the display, so a shorter string never leaves garbage
//! from a previous, longer one on screen. Text is ASCII only.

use core::fmt::Write;

use heapless::String;

use crate::timer::Player;

/// Display width in characters.
pub const COLUMNS: usize = 16;

/// Number of display rows.
pub const ROWS: usize = 2;

/// Idle screen, top line.
pub const IDLE_TOP: &str = "Press to start";
/// Idle screen, bottom line.
pub const IDLE_BOTTOM: &str = "  Game Night Timer";
/// Timeout screen, top line.
pub const TIMEOUT_TOP: &str = "  TIME IS UP";
/// Timeout screen, bottom line.
pub const TIMEOUT_BOTTOM: &str = "Press for next";

/// Pad or truncate `text` to exactly [`COLUMNS`] characters.
pub fn pad_line(text: &str) -> String<COLUMNS> {
    let mut line = String::new();
    for c in text.chars().take(COLUMNS) {
        let _ = line.push(c);
    }
    while line.len() < COLUMNS {
        let _ = line.push(' ');
    }
    line
}

/// Countdown top line: the active player.
pub fn countdown_top(player: Player) -> String<COLUMNS> {
    let mut raw: String<COLUMNS> = String::new();
    let _ = write!(raw, "Player {}", player.number());
    pad_line(&raw)
}

/// Countdown bottom line: remaining whole seconds, right-aligned in a
/// 3-wide field.
pub fn countdown_bottom(remaining_s: u32) -> String<COLUMNS> {
    let mut raw: String<COLUMNS> = String::new();
    let _ = write!(raw, "Time: {:3}s", remaining_s);
    pad_line(&raw)
}
