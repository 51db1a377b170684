//! Warning LED bank
//!
//! Three independent output lines for the green/yellow/red warning
//! bands. All three are written on every call; nothing is cached.

use embedded_hal::digital::OutputPin;

use kairos_core::traits::LedPanel;

/// Green/yellow/red LED bank.
pub struct LedBank<G, Y, R> {
    green: G,
    yellow: Y,
    red: R,
}

impl<G: OutputPin, Y: OutputPin, R: OutputPin> LedBank<G, Y, R> {
    /// Create the bank with all LEDs off.
    pub fn new(green: G, yellow: Y, red: R) -> Self {
        let mut bank = Self { green, yellow, red };
        bank.set(false, false, false);
        bank
    }
}

impl<G: OutputPin, Y: OutputPin, R: OutputPin> LedPanel for LedBank<G, Y, R> {
    fn set(&mut self, green: bool, yellow: bool, red: bool) {
        // GPIO writes on the supported targets cannot fail
        let _ = self.green.set_state(green.into());
        let _ = self.yellow.set_state(yellow.into());
        let _ = self.red.set_state(red.into());
    }
}
