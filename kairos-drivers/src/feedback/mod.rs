//! LED and buzzer feedback
//!
//! The composite [`Feedback`] driver owns the LED bank and the buzzer
//! and plays the fixed cue sequences: per-player turn-start tones and
//! the timeout alarm. The sequences block; they are the only long
//! operations in the system and run at most once per transition.

pub mod buzzer;
pub mod leds;

pub use buzzer::{PwmBuzzer, TonePwm};
pub use leds::LedBank;

use embedded_hal::delay::DelayNs;

use kairos_core::timer::{Player, WarningLevel};
use kairos_core::traits::{LedPanel, Sounder};

/// Player 1 start-tone pitch.
const PLAYER1_TONE_HZ: u16 = 1200;
/// Player 2 start-tone pitch (lower, and one more beep).
const PLAYER2_TONE_HZ: u16 = 900;
const START_BEEP_MS: u32 = 80;
const START_GAP_MS: u32 = 70;
const START_VOLUME: f32 = 0.5;

/// Timeout alarm: descending sweep, full volume.
const ALARM_SWEEP_HZ: [u16; 5] = [1200, 1000, 800, 600, 400];
const ALARM_TONE_MS: u32 = 120;
const ALARM_GAP_MS: u32 = 40;
const ALARM_FLASHES: u8 = 6;
const ALARM_FLASH_MS: u32 = 120;

/// LED bank + buzzer with the timer's cue sequences.
pub struct Feedback<L, S, D> {
    leds: L,
    buzzer: S,
    delay: D,
}

impl<L: LedPanel, S: Sounder, D: DelayNs> Feedback<L, S, D> {
    pub fn new(leds: L, buzzer: S, delay: D) -> Self {
        Self { leds, buzzer, delay }
    }

    /// Drive the three LED lines directly.
    pub fn set_leds(&mut self, green: bool, yellow: bool, red: bool) {
        self.leds.set(green, yellow, red);
    }

    /// Light the LED matching a warning band.
    pub fn show_level(&mut self, level: WarningLevel) {
        match level {
            WarningLevel::Green => self.leds.set(true, false, false),
            WarningLevel::Yellow => self.leds.set(false, true, false),
            WarningLevel::Red => self.leds.set(false, false, true),
        }
    }

    /// Turn-start cue: two beeps at a higher pitch for player 1, three
    /// at a lower pitch for player 2 - tell the players apart by ear.
    pub fn start_tones(&mut self, player: Player) {
        let (count, freq) = match player {
            Player::One => (2, PLAYER1_TONE_HZ),
            Player::Two => (3, PLAYER2_TONE_HZ),
        };
        for _ in 0..count {
            self.buzzer.beep(freq, START_BEEP_MS, START_VOLUME);
            self.delay.delay_ms(START_GAP_MS);
        }
    }

    /// Timeout alarm: five-tone descending sweep, then six red flash
    /// cycles. Deliberately attention-grabbing, ~1.5s, blocking; run
    /// exactly once per timeout.
    pub fn timeout_alarm(&mut self) {
        for freq in ALARM_SWEEP_HZ {
            self.buzzer.beep(freq, ALARM_TONE_MS, 1.0);
            self.delay.delay_ms(ALARM_GAP_MS);
        }
        for _ in 0..ALARM_FLASHES {
            self.leds.set(false, false, true);
            self.delay.delay_ms(ALARM_FLASH_MS);
            self.leds.set(false, false, false);
            self.delay.delay_ms(ALARM_FLASH_MS);
        }
    }

    /// Cleanup path: blank the LEDs and cut any tone.
    pub fn quiesce(&mut self) {
        self.leds.set(false, false, false);
        self.buzzer.silence();
    }
}
