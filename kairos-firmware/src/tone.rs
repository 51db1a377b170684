//! Buzzer PWM channel
//!
//! Implements the drivers' [`TonePwm`] abstraction on an RP2040 PWM
//! slice. The 125 MHz system clock is divided down to a 1 MHz PWM
//! tick so audible frequencies fit the 16-bit wrap counter.

use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use fixed::traits::ToFixed;

use kairos_drivers::feedback::TonePwm;

/// PWM counter tick rate after the clock divider.
const PWM_TICK_HZ: u32 = 1_000_000;
/// 125 MHz system clock / 125 = 1 MHz.
const CLOCK_DIVIDER: u32 = 125;

/// Buzzer PWM on slice 6 channel B (GP13).
pub struct BuzzerPwm {
    pwm: Pwm<'static>,
    config: PwmConfig,
}

impl BuzzerPwm {
    /// Take over a configured PWM slice, starting silent.
    pub fn new(mut pwm: Pwm<'static>) -> Self {
        let mut config = PwmConfig::default();
        config.divider = CLOCK_DIVIDER.to_fixed();
        config.top = (PWM_TICK_HZ / 1_000) as u16 - 1; // idle carrier, zero duty
        config.compare_b = 0;
        pwm.set_config(&config);
        Self { pwm, config }
    }
}

impl TonePwm for BuzzerPwm {
    fn set_frequency(&mut self, hz: u16) {
        let period = (PWM_TICK_HZ / u32::from(hz.max(1))).clamp(2, u32::from(u16::MAX));
        self.config.top = period as u16 - 1;
        self.pwm.set_config(&self.config);
    }

    fn set_duty(&mut self, fraction: f32) {
        let period = u32::from(self.config.top) + 1;
        self.config.compare_b = (period as f32 * fraction) as u16;
        self.pwm.set_config(&self.config);
    }
}
