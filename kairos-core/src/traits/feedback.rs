//! LED and buzzer output traits

/// Three-channel warning LED panel.
///
/// All three channels are set on every call; the bands are mutually
/// exclusive in practice but that is the caller's policy, not a type
/// invariant.
pub trait LedPanel {
    /// Drive the green/yellow/red lines.
    fn set(&mut self, green: bool, yellow: bool, red: bool);
}

/// Single-channel tone generator.
pub trait Sounder {
    /// Play a tone and block for its full duration, then silence.
    ///
    /// `volume` maps linearly to PWM duty and is clamped to [0, 1].
    /// This is the one operation in the system allowed to block the
    /// control loop; callers budget for it.
    fn beep(&mut self, freq_hz: u16, duration_ms: u32, volume: f32);

    /// Cut the tone immediately (cleanup path).
    fn silence(&mut self);
}
