//! Debounced push button
//!
//! Buttons are wired pull-up idle-high, active-low. A low reading is
//! only reported as a press after it survives a fixed settle delay;
//! contact bounce that reads high again on reconfirmation is silently
//! discarded.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

/// Settle delay before a press reading is trusted.
const SETTLE_MS: u32 = 35;
/// Poll step while waiting for release.
const RELEASE_POLL_MS: u32 = 10;

/// Debounced active-low button.
pub struct DebouncedButton<P, D> {
    pin: P,
    delay: D,
}

impl<P: InputPin, D: DelayNs> DebouncedButton<P, D> {
    pub fn new(pin: P, delay: D) -> Self {
        Self { pin, delay }
    }

    /// Sample the line. Returns `true` only for a press still present
    /// after the settle delay.
    pub fn poll(&mut self) -> Result<bool, P::Error> {
        if self.pin.is_low()? {
            self.delay.delay_ms(SETTLE_MS);
            return self.pin.is_low();
        }
        Ok(false)
    }

    /// Block until the line reads released.
    ///
    /// Called after a press has been acted upon so one physical press
    /// fires exactly one transition. There is deliberately no timeout:
    /// release is guaranteed by physical button behavior, and
    /// stuck-switch hardware is out of scope.
    pub fn wait_release(&mut self) -> Result<(), P::Error> {
        while self.pin.is_low()? {
            self.delay.delay_ms(RELEASE_POLL_MS);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    /// Mock pin replaying a scripted sequence of levels (true = low).
    struct ScriptedPin {
        levels: &'static [bool],
        index: usize,
    }

    impl ScriptedPin {
        fn new(levels: &'static [bool]) -> Self {
            Self { levels, index: 0 }
        }
    }

    impl ErrorType for ScriptedPin {
        type Error = Infallible;
    }

    impl InputPin for ScriptedPin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            self.is_low().map(|low| !low)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            let level = self.levels[self.index.min(self.levels.len() - 1)];
            self.index += 1;
            Ok(level)
        }
    }

    struct MockDelay {
        slept_ms: u32,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.slept_ms += ns / 1_000_000;
        }
    }

    fn button(levels: &'static [bool]) -> DebouncedButton<ScriptedPin, MockDelay> {
        DebouncedButton::new(ScriptedPin::new(levels), MockDelay { slept_ms: 0 })
    }

    #[test]
    fn idle_line_is_not_a_press() {
        let mut b = button(&[false]);
        assert_eq!(b.poll(), Ok(false));
        // No settle delay was spent on an idle line
        assert_eq!(b.delay.slept_ms, 0);
    }

    #[test]
    fn press_confirmed_after_settle() {
        let mut b = button(&[true, true]);
        assert_eq!(b.poll(), Ok(true));
        assert_eq!(b.delay.slept_ms, SETTLE_MS);
    }

    #[test]
    fn glitch_inside_settle_window_is_suppressed() {
        // Low on first read, back high on reconfirmation
        let mut b = button(&[true, false]);
        assert_eq!(b.poll(), Ok(false));
    }

    #[test]
    fn wait_release_blocks_until_high() {
        let mut b = button(&[true, true, true, false]);
        b.wait_release().unwrap();
        assert_eq!(b.delay.slept_ms, 3 * RELEASE_POLL_MS);
    }
}
