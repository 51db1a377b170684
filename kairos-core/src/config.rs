//! Configuration type definitions
//!
//! Configuration is fixed at build time: the firmware crate holds a
//! `const TimerConfig` alongside its pin assignments. Validation still
//! runs once at boot so a nonsensical constant (for example a yellow
//! warning threshold at or below the red one, which would skip the
//! yellow band entirely) is rejected before the timer ever runs.

/// Ways a `TimerConfig` can be internally inconsistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Turn duration is zero
    ZeroTurn,
    /// Yellow threshold must be strictly above the red threshold
    WarningBandOrder,
    /// Turn duration must be longer than the yellow threshold
    TurnInsideWarningBand,
}

/// Turn-timer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerConfig {
    /// Per-turn time in seconds
    pub turn_seconds: u32,
    /// Remaining seconds at or below which the yellow LED takes over
    pub warn_yellow: u32,
    /// Remaining seconds at or below which the red LED takes over
    pub warn_red: u32,
    /// Wire a second button that forces player 2's turn
    pub two_buttons: bool,
}

impl TimerConfig {
    /// Boot-time sanity check.
    ///
    /// A violation here is a build mistake, not a runtime condition;
    /// the firmware panics on it before entering the control loop.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.turn_seconds == 0 {
            return Err(ConfigError::ZeroTurn);
        }
        if self.warn_yellow <= self.warn_red {
            return Err(ConfigError::WarningBandOrder);
        }
        if self.turn_seconds <= self.warn_yellow {
            return Err(ConfigError::TurnInsideWarningBand);
        }
        Ok(())
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            turn_seconds: 10,
            warn_yellow: 4,
            warn_red: 2,
            two_buttons: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(TimerConfig::default().validate(), Ok(()));
    }

    #[test]
    fn zero_turn_rejected() {
        let config = TimerConfig {
            turn_seconds: 0,
            ..TimerConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTurn));
    }

    #[test]
    fn inverted_warning_bands_rejected() {
        let config = TimerConfig {
            warn_yellow: 2,
            warn_red: 4,
            ..TimerConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::WarningBandOrder));

        // Equal thresholds would also erase the yellow band
        let config = TimerConfig {
            warn_yellow: 3,
            warn_red: 3,
            ..TimerConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::WarningBandOrder));
    }

    #[test]
    fn turn_shorter_than_yellow_band_rejected() {
        let config = TimerConfig {
            turn_seconds: 4,
            warn_yellow: 4,
            warn_red: 2,
            two_buttons: false,
        };
        assert_eq!(config.validate(), Err(ConfigError::TurnInsideWarningBand));
    }
}
