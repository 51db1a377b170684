//! HD44780 character display behind a PCF8574 I2C expander
//!
//! The expander gives us eight output bits on a 2-wire bus; the
//! display's data path is wired to the high nibble, so every command
//! or character byte travels as two 4-bit transfers. Each nibble is
//! one expander byte sent twice - once with the enable bit high, once
//! low - because the controller latches on enable's falling edge:
//!
//! ```text
//! bit 7..4  data nibble (D7..D4)
//! bit 3     backlight (kept on)
//! bit 2     enable
//! bit 1     read/write (always write, 0)
//! bit 0     register select (0 = command, 1 = data)
//! ```
//!
//! The controller exposes no busy flag over this bus, so the slow
//! operations (wake-up, clear) are timed contracts: a fixed minimum
//! delay after the write, not a polled condition.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use kairos_core::traits::{CharacterDisplay, DisplayError};

/// Common PCF8574 backpack address (some boards use 0x3F).
pub const DEFAULT_ADDR: u8 = 0x27;

const BACKLIGHT: u8 = 0x08;
const ENABLE: u8 = 0x04;
const REGISTER_SELECT: u8 = 0x01;

/// Controller commands
const CMD_CLEAR: u8 = 0x01;
const CMD_ENTRY_MODE: u8 = 0x06; // auto-increment cursor, no shift
const CMD_DISPLAY_ON: u8 = 0x0C; // display on, cursor off
const CMD_FUNCTION_SET: u8 = 0x28; // 4-bit, 2 lines, 5x8 font
const CMD_SET_DDRAM: u8 = 0x80;

/// DDRAM address offset of row 1 on two-line controllers.
const ROW_STRIDE: u8 = 0x40;

/// Minimum settle after the wake-up nibbles.
const WAKE_SETTLE_MS: u32 = 5;
/// Minimum settle after a clear; clearing is internally slow.
const CLEAR_SETTLE_MS: u32 = 2;

/// HD44780 driver over a byte-oriented expander bus.
pub struct Hd44780<I2C, D> {
    bus: I2C,
    addr: u8,
    delay: D,
}

impl<I2C: I2c, D: DelayNs> Hd44780<I2C, D> {
    /// Create a driver for the display at `addr`. Call [`init`] before
    /// anything else.
    ///
    /// [`init`]: Hd44780::init
    pub fn new(bus: I2C, addr: u8, delay: D) -> Self {
        Self { bus, addr, delay }
    }

    /// One nibble transfer: expander byte with enable pulsed high then
    /// low to latch on the falling edge.
    fn write_nibble(&mut self, nibble: u8, data: bool) -> Result<(), DisplayError> {
        let rs = if data { REGISTER_SELECT } else { 0 };
        let frame = (nibble << 4) | BACKLIGHT | rs;
        self.bus
            .write(self.addr, &[frame | ENABLE])
            .map_err(|_| DisplayError::Bus)?;
        self.bus
            .write(self.addr, &[frame & !ENABLE])
            .map_err(|_| DisplayError::Bus)
    }

    /// Command byte: high nibble then low nibble.
    fn command(&mut self, cmd: u8) -> Result<(), DisplayError> {
        self.write_nibble(cmd >> 4, false)?;
        self.write_nibble(cmd & 0x0F, false)
    }

    /// Character byte at the current cursor.
    fn write_char(&mut self, ch: u8) -> Result<(), DisplayError> {
        self.write_nibble(ch >> 4, true)?;
        self.write_nibble(ch & 0x0F, true)
    }

    /// Device wake-up and feature setup.
    ///
    /// The controller may be in an unknown 8-bit state at power-on, so
    /// 4-bit mode is forced by three raw 0x3 nibbles with settling
    /// delays before the 0x2 latch. The order of the feature commands
    /// after that is mandatory: issuing them before 4-bit mode is
    /// latched is undefined behavior on the physical controller.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.write_nibble(0x03, false)?;
        self.delay.delay_ms(WAKE_SETTLE_MS);
        self.write_nibble(0x03, false)?;
        self.delay.delay_ms(WAKE_SETTLE_MS);
        self.write_nibble(0x03, false)?;
        self.write_nibble(0x02, false)?;

        self.command(CMD_FUNCTION_SET)?;
        self.command(CMD_DISPLAY_ON)?;
        self.clear()?;
        self.command(CMD_ENTRY_MODE)
    }
}

impl<I2C: I2c, D: DelayNs> CharacterDisplay for Hd44780<I2C, D> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.command(CMD_CLEAR)?;
        self.delay.delay_ms(CLEAR_SETTLE_MS);
        Ok(())
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError> {
        self.command(CMD_SET_DDRAM | (col + ROW_STRIDE * row))
    }

    fn write_str(&mut self, text: &str) -> Result<(), DisplayError> {
        // Cursor auto-increments per entry mode; no re-addressing
        for ch in text.bytes() {
            self.write_char(ch)?;
        }
        Ok(())
    }
}
