//! Wraparound-safe millisecond clock arithmetic
//!
//! The firmware samples a free-running millisecond counter that rolls
//! over at the `u32` width. Deadline arithmetic therefore has to treat
//! the difference of two counter values as a signed quantity over the
//! counter's modulus; plain subtraction would turn a rollover into a
//! spuriously huge remaining time.

/// A point in time on the free-running millisecond counter.
///
/// `Instant` carries no epoch. Only differences between two instants
/// are meaningful, and only when they are less than half the counter
/// range (~24.8 days) apart - far beyond any turn length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Instant {
    ticks_ms: u32,
}

impl Instant {
    /// Wrap a raw counter reading.
    pub const fn from_ticks(ticks_ms: u32) -> Self {
        Self { ticks_ms }
    }

    /// Raw counter value in milliseconds.
    pub const fn ticks(self) -> u32 {
        self.ticks_ms
    }

    /// Compute a deadline `ms` milliseconds ahead, wrapping at the
    /// counter width.
    pub const fn wrapping_add_ms(self, ms: u32) -> Self {
        Self {
            ticks_ms: self.ticks_ms.wrapping_add(ms),
        }
    }

    /// Signed milliseconds from `self` until `deadline`.
    ///
    /// Positive while the deadline is in the future, negative once it
    /// has passed. Correct across counter rollover for any distance
    /// below `i32::MAX` milliseconds.
    pub const fn until(self, deadline: Instant) -> i32 {
        deadline.ticks_ms.wrapping_sub(self.ticks_ms) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn future_deadline_is_positive() {
        let now = Instant::from_ticks(1_000);
        let deadline = now.wrapping_add_ms(10_000);
        assert_eq!(now.until(deadline), 10_000);
    }

    #[test]
    fn past_deadline_is_negative() {
        let deadline = Instant::from_ticks(5_000);
        let now = Instant::from_ticks(7_500);
        assert_eq!(now.until(deadline), -2_500);
    }

    #[test]
    fn distance_survives_counter_rollover() {
        // Deadline lands after the counter wraps
        let now = Instant::from_ticks(u32::MAX - 500);
        let deadline = now.wrapping_add_ms(10_000);
        assert!(deadline.ticks() < now.ticks());
        assert_eq!(now.until(deadline), 10_000);
    }

    #[test]
    fn elapsed_past_rollover_is_negative() {
        let deadline = Instant::from_ticks(u32::MAX - 100);
        let now = deadline.wrapping_add_ms(300);
        assert_eq!(now.until(deadline), -300);
    }

    proptest! {
        /// For any counter value and any delta representable as a
        /// positive signed distance, `until` recovers the delta exactly
        /// whether or not the addition wrapped.
        #[test]
        fn until_recovers_any_delta(start in any::<u32>(), delta in 0u32..=i32::MAX as u32) {
            let now = Instant::from_ticks(start);
            let deadline = now.wrapping_add_ms(delta);
            prop_assert_eq!(now.until(deadline), delta as i32);
        }
    }
}
