//! Character display trait and screen rendering helpers

use crate::screen;
use crate::timer::Player;

/// Errors that can occur talking to the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// The expander bus rejected a write
    Bus,
}

/// Trait for a 16x2-class character display.
///
/// Implementations own the cursor; `write_str` lays characters out
/// left-to-right from the current cursor position (the controller
/// auto-increments).
pub trait CharacterDisplay {
    /// Clear the screen and home the cursor.
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Move the cursor to (`col`, `row`).
    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError>;

    /// Write ASCII text at the current cursor.
    fn write_str(&mut self, text: &str) -> Result<(), DisplayError>;
}

/// Helper trait rendering the timer's three screens.
///
/// Lines are padded/truncated to the full display width so callers
/// never depend on leftovers from a previous render.
pub trait Screen: CharacterDisplay {
    /// "Press to start" banner shown while idle.
    fn show_idle(&mut self) -> Result<(), DisplayError> {
        self.clear()?;
        self.set_cursor(0, 0)?;
        self.write_str(&screen::pad_line(screen::IDLE_TOP))?;
        self.set_cursor(0, 1)?;
        self.write_str(&screen::pad_line(screen::IDLE_BOTTOM))
    }

    /// Active player and remaining seconds.
    ///
    /// Does not clear: both lines are rewritten full-width, and
    /// skipping the clear avoids its long settle delay on every
    /// second change.
    fn show_countdown(&mut self, player: Player, remaining_s: u32) -> Result<(), DisplayError> {
        self.set_cursor(0, 0)?;
        self.write_str(&screen::countdown_top(player))?;
        self.set_cursor(0, 1)?;
        self.write_str(&screen::countdown_bottom(remaining_s))
    }

    /// Timeout screen shown after the alarm.
    fn show_timeout(&mut self) -> Result<(), DisplayError> {
        self.clear()?;
        self.set_cursor(0, 0)?;
        self.write_str(&screen::pad_line(screen::TIMEOUT_TOP))?;
        self.set_cursor(0, 1)?;
        self.write_str(&screen::pad_line(screen::TIMEOUT_BOTTOM))
    }
}

// Blanket implementation for all CharacterDisplay types
impl<T: CharacterDisplay> Screen for T {}
