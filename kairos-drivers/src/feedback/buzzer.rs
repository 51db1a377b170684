//! PWM buzzer
//!
//! embedded-hal 1.0 has no trait that controls both PWM frequency and
//! duty, so the buzzer is generic over a small local trait the
//! firmware implements for its PWM peripheral.

use embedded_hal::delay::DelayNs;

use kairos_core::traits::Sounder;

/// PWM channel abstraction for tone generation.
pub trait TonePwm {
    /// Set the carrier frequency in Hz.
    fn set_frequency(&mut self, hz: u16);

    /// Set the duty cycle as a fraction of full scale. Callers pass a
    /// value already clamped to [0, 1].
    fn set_duty(&mut self, fraction: f32);
}

/// Buzzer on a PWM channel.
///
/// `beep` blocks for the full tone duration; the buzzer is the sole
/// timing resource and calls are kept short by the callers.
pub struct PwmBuzzer<T, D> {
    pwm: T,
    delay: D,
}

impl<T: TonePwm, D: DelayNs> PwmBuzzer<T, D> {
    /// Create a silent buzzer.
    pub fn new(pwm: T, delay: D) -> Self {
        let mut buzzer = Self { pwm, delay };
        buzzer.silence();
        buzzer
    }
}

impl<T: TonePwm, D: DelayNs> Sounder for PwmBuzzer<T, D> {
    fn beep(&mut self, freq_hz: u16, duration_ms: u32, volume: f32) {
        // Volume maps linearly to duty, clamped to [0, 1]
        let duty = volume.clamp(0.0, 1.0);
        self.pwm.set_frequency(freq_hz);
        self.pwm.set_duty(duty);
        self.delay.delay_ms(duration_ms);
        self.pwm.set_duty(0.0);
    }

    fn silence(&mut self) {
        self.pwm.set_duty(0.0);
    }
}
