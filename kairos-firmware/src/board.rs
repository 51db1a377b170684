//! Board wiring and timer configuration
//!
//! All configuration is fixed at build time; edit the constants here
//! and reflash. `main` validates the timer config once at boot.
//!
//! Wiring (Raspberry Pi Pico, GP numbers):
//!
//! | Line            | Pin  |
//! |-----------------|------|
//! | LCD SDA         | GP0  |
//! | LCD SCL         | GP1  |
//! | Buzzer (PWM)    | GP13 |
//! | Main button     | GP14 |
//! | Player-2 button | GP15 |
//! | Green LED       | GP16 |
//! | Yellow LED      | GP17 |
//! | Red LED         | GP18 |
//!
//! Buttons are wired to ground with internal pull-ups (active-low).

use kairos_core::config::TimerConfig;

/// Turn timer settings.
pub const TIMER: TimerConfig = TimerConfig {
    turn_seconds: 10,
    warn_yellow: 4,
    warn_red: 2,
    // Set true if wiring the player-2 button on GP15
    two_buttons: false,
};

/// PCF8574 backpack address; some boards use 0x3F.
pub const LCD_ADDR: u8 = 0x27;

/// I2C bus clock for the display expander.
pub const I2C_FREQ_HZ: u32 = 400_000;

/// Sleep between polls while idle or timed out; keeps power draw down
/// without hurting button responsiveness beyond this interval.
pub const IDLE_POLL_MS: u64 = 20;
