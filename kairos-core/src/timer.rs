//! Turn-timer state machine
//!
//! `TurnTimer` is the single owner of the authoritative state: which
//! player is up, the deadline, and the render-dedup cache. It is pure
//! logic - the control loop feeds it button presses and clock samples
//! and applies the returned effects to the LEDs, buzzer, and display.

use crate::clock::Instant;
use crate::config::TimerConfig;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The opponent.
    pub const fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// 1-based player number for screens and logs.
    pub const fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

/// Timer phase. Transitions happen only inside [`TurnTimer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Waiting for the first press
    Idle,
    /// Counting down the given player's turn
    Running(Player),
    /// Countdown hit zero; waiting for a press to hand over
    TimedOut,
}

/// Three-band LED warning level derived from the remaining time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WarningLevel {
    Green,
    Yellow,
    Red,
}

impl WarningLevel {
    /// Band for `remaining_s` whole seconds against the configured
    /// thresholds: green above yellow, yellow above red, red at or
    /// below the red threshold.
    pub const fn for_remaining(remaining_s: u32, config: &TimerConfig) -> Self {
        if remaining_s > config.warn_yellow {
            WarningLevel::Green
        } else if remaining_s > config.warn_red {
            WarningLevel::Yellow
        } else {
            WarningLevel::Red
        }
    }
}

/// Per-tick effects while a countdown is running.
///
/// The control loop applies these in order: LEDs first, then the
/// conditional display render, then timeout handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tick {
    /// LED band for this tick
    pub level: WarningLevel,
    /// Remaining whole seconds, present only when the displayed value
    /// actually changed (keeps bus traffic down)
    pub render_second: Option<u32>,
    /// The deadline passed on this tick; the phase is now `TimedOut`
    pub expired: bool,
}

/// The turn-timer state machine.
pub struct TurnTimer {
    config: TimerConfig,
    phase: Phase,
    /// Meaningful in `Running` and, for alternation, in `TimedOut`
    active_player: Player,
    /// Meaningful only while `Running`
    deadline: Instant,
    /// Render-dedup cache; `None` forces one render on the next tick
    last_rendered_second: Option<u32>,
}

impl TurnTimer {
    /// Create an idle timer. `config` must already be validated.
    pub const fn new(config: TimerConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
            active_player: Player::One,
            deadline: Instant::from_ticks(0),
            last_rendered_second: None,
        }
    }

    /// Current phase.
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Player whose turn is (or was most recently) active.
    pub const fn active_player(&self) -> Player {
        self.active_player
    }

    /// Configured turn length in seconds.
    pub const fn turn_seconds(&self) -> u32 {
        self.config.turn_seconds
    }

    /// Handle a qualifying press of the main button.
    ///
    /// From `Idle` this starts player 1. From `TimedOut` or `Running`
    /// it hands the turn to the other player - a press while running
    /// passes immediately, with no confirmation. Returns the player
    /// whose turn starts.
    pub fn press(&mut self, now: Instant) -> Player {
        let next = match self.phase {
            Phase::Idle => Player::One,
            Phase::Running(_) | Phase::TimedOut => self.active_player.other(),
        };
        self.start_turn(next, now);
        next
    }

    /// Handle the optional second button: always starts player 2.
    pub fn press_secondary(&mut self, now: Instant) -> Player {
        self.start_turn(Player::Two, now);
        Player::Two
    }

    fn start_turn(&mut self, player: Player, now: Instant) {
        self.active_player = player;
        self.phase = Phase::Running(player);
        self.deadline = now.wrapping_add_ms(self.config.turn_seconds * 1000);
        // Force one render on the next tick
        self.last_rendered_second = None;
    }

    /// Advance the countdown. Returns `None` unless a turn is running.
    ///
    /// When the deadline has passed the phase flips to `TimedOut` and
    /// the returned tick carries `expired = true`; the caller blanks
    /// the LEDs, plays the alarm, and renders the timeout screen.
    pub fn tick(&mut self, now: Instant) -> Option<Tick> {
        let Phase::Running(_) = self.phase else {
            return None;
        };

        let remaining_ms = now.until(self.deadline);
        let remaining_s = if remaining_ms > 0 {
            remaining_ms as u32 / 1000
        } else {
            0
        };

        let level = WarningLevel::for_remaining(remaining_s, &self.config);

        let render_second = if self.last_rendered_second != Some(remaining_s) {
            self.last_rendered_second = Some(remaining_s);
            Some(remaining_s)
        } else {
            None
        };

        let expired = remaining_ms <= 0;
        if expired {
            self.phase = Phase::TimedOut;
        }

        Some(Tick {
            level,
            render_second,
            expired,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timer() -> TurnTimer {
        TurnTimer::new(TimerConfig::default())
    }

    fn at(ms: u32) -> Instant {
        Instant::from_ticks(ms)
    }

    #[test]
    fn first_press_starts_player_one() {
        let mut t = timer();
        assert_eq!(t.phase(), Phase::Idle);
        assert_eq!(t.press(at(0)), Player::One);
        assert_eq!(t.phase(), Phase::Running(Player::One));
    }

    #[test]
    fn press_while_running_passes_immediately() {
        let mut t = timer();
        t.press(at(0));
        // No confirmation step: the opponent's clock starts right away
        assert_eq!(t.press(at(3_000)), Player::Two);
        assert_eq!(t.phase(), Phase::Running(Player::Two));
        assert_eq!(t.press(at(4_000)), Player::One);
    }

    #[test]
    fn press_alternates_after_timeout() {
        let mut t = timer();
        t.press(at(0));
        let tick = t.tick(at(10_000)).unwrap();
        assert!(tick.expired);
        assert_eq!(t.phase(), Phase::TimedOut);
        // Player 1 timed out, so the next press belongs to player 2
        assert_eq!(t.press(at(12_000)), Player::Two);

        let _ = t.tick(at(22_000)).unwrap();
        assert_eq!(t.phase(), Phase::TimedOut);
        assert_eq!(t.press(at(23_000)), Player::One);
    }

    #[test]
    fn press_never_leaves_idle_or_timed_out() {
        // From every reachable phase a press lands in Running(_)
        let mut t = timer();
        t.press(at(0));
        assert!(matches!(t.phase(), Phase::Running(_)));
        t.press(at(1_000));
        assert!(matches!(t.phase(), Phase::Running(_)));
        let _ = t.tick(at(12_000));
        t.press(at(13_000));
        assert!(matches!(t.phase(), Phase::Running(_)));
    }

    #[test]
    fn secondary_press_forces_player_two() {
        let mut t = timer();
        assert_eq!(t.press_secondary(at(0)), Player::Two);
        assert_eq!(t.phase(), Phase::Running(Player::Two));
    }

    #[test]
    fn tick_is_none_unless_running() {
        let mut t = timer();
        assert_eq!(t.tick(at(0)), None);
        t.press(at(0));
        let _ = t.tick(at(10_000)).unwrap();
        assert_eq!(t.phase(), Phase::TimedOut);
        assert_eq!(t.tick(at(10_020)), None);
    }

    #[test]
    fn render_dedup_within_same_second() {
        let mut t = timer();
        t.press(at(0));

        // Phase entry reset the cache, so the first tick renders
        let tick = t.tick(at(100)).unwrap();
        assert_eq!(tick.render_second, Some(9));

        // Same displayed second: no render
        let tick = t.tick(at(200)).unwrap();
        assert_eq!(tick.render_second, None);
        let tick = t.tick(at(900)).unwrap();
        assert_eq!(tick.render_second, None);

        // Second rolls over: render once
        let tick = t.tick(at(1_100)).unwrap();
        assert_eq!(tick.render_second, Some(8));
    }

    #[test]
    fn phase_entry_forces_one_render() {
        let mut t = timer();
        t.press(at(0));
        let _ = t.tick(at(100));
        // Passing the turn resets the dedup cache
        t.press(at(500));
        let tick = t.tick(at(600)).unwrap();
        assert!(tick.render_second.is_some());
    }

    #[test]
    fn led_banding_thresholds() {
        let config = TimerConfig::default(); // turn 10, yellow 4, red 2
        assert_eq!(
            WarningLevel::for_remaining(10, &config),
            WarningLevel::Green
        );
        assert_eq!(WarningLevel::for_remaining(5, &config), WarningLevel::Green);
        assert_eq!(
            WarningLevel::for_remaining(4, &config),
            WarningLevel::Yellow
        );
        assert_eq!(
            WarningLevel::for_remaining(3, &config),
            WarningLevel::Yellow
        );
        assert_eq!(WarningLevel::for_remaining(2, &config), WarningLevel::Red);
        assert_eq!(WarningLevel::for_remaining(0, &config), WarningLevel::Red);
    }

    #[test]
    fn countdown_scenario() {
        // turn 10s, yellow 4, red 2; player 1 starts at t=0
        let mut t = timer();
        assert_eq!(t.press(at(0)), Player::One);

        let tick = t.tick(at(0)).unwrap();
        assert_eq!(tick.level, WarningLevel::Green);
        assert_eq!(tick.render_second, Some(10));
        assert!(!tick.expired);

        // t=6s: 4s remain, yellow band, rendered exactly once
        let tick = t.tick(at(6_000)).unwrap();
        assert_eq!(tick.level, WarningLevel::Yellow);
        assert_eq!(tick.render_second, Some(4));
        // Re-tick while 4s still remain: deduped
        let tick = t.tick(at(6_000)).unwrap();
        assert_eq!(tick.render_second, None);
        // A little later the displayed second drops to 3
        let tick = t.tick(at(6_500)).unwrap();
        assert_eq!(tick.render_second, Some(3));

        // t=8s: red band
        let tick = t.tick(at(8_000)).unwrap();
        assert_eq!(tick.level, WarningLevel::Red);

        // t=10s: expired
        let tick = t.tick(at(10_000)).unwrap();
        assert!(tick.expired);
        assert_eq!(t.phase(), Phase::TimedOut);

        // Next press hands a fresh 10s turn to player 2
        assert_eq!(t.press(at(11_000)), Player::Two);
        let tick = t.tick(at(11_000)).unwrap();
        assert_eq!(tick.render_second, Some(10));
        assert_eq!(tick.level, WarningLevel::Green);
    }

    #[test]
    fn deadline_spanning_counter_rollover() {
        let mut t = timer();
        let near_wrap = at(u32::MAX - 2_000);
        t.press(near_wrap);

        // 3s in (counter has wrapped): 7s remain
        let tick = t.tick(near_wrap.wrapping_add_ms(3_000)).unwrap();
        assert_eq!(tick.render_second, Some(7));
        assert!(!tick.expired);

        let tick = t.tick(near_wrap.wrapping_add_ms(10_000)).unwrap();
        assert!(tick.expired);
    }
}
