//! The control loop
//!
//! Single-threaded and cooperative: one loop polls the button(s) and
//! advances the state machine. Per tick the ordering is fixed - LED
//! update, then the dedup-gated display render, then timeout handling
//! - so LED and display state are never stale relative to each other
//! for more than one tick. The blocking operations (tones, alarm,
//! debounce settle, release wait) are short and bounded by design.

use defmt::{info, warn};
use embassy_futures::yield_now;
use embassy_time::Timer;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

use kairos_core::clock::Instant;
use kairos_core::timer::TurnTimer;
use kairos_core::traits::{DisplayError, LedPanel, Screen, Sounder};
use kairos_drivers::button::DebouncedButton;
use kairos_drivers::feedback::Feedback;

use crate::board;

/// Current instant on the free-running millisecond counter.
pub fn now() -> Instant {
    Instant::from_ticks(embassy_time::Instant::now().as_millis() as u32)
}

/// Run the timer until a display bus fault. Never returns otherwise.
pub async fn run<D, L, S, DL, P1, P2>(
    timer: &mut TurnTimer,
    display: &mut D,
    feedback: &mut Feedback<L, S, DL>,
    primary: &mut DebouncedButton<P1, DL>,
    mut secondary: Option<&mut DebouncedButton<P2, DL>>,
) -> Result<(), DisplayError>
where
    D: Screen,
    L: LedPanel,
    S: Sounder,
    DL: DelayNs,
    P1: InputPin,
    P2: InputPin,
{
    feedback.set_leds(false, false, false);
    display.show_idle()?;
    info!("turn timer ready; press the button to start player 1");

    loop {
        if matches!(primary.poll(), Ok(true)) {
            let player = timer.press(now());
            info!("turn start: player {}", player.number());
            feedback.start_tones(player);
            // No tick has run yet, so show the full turn length
            display.show_countdown(player, timer.turn_seconds())?;
            let _ = primary.wait_release();
        }

        if let Some(button) = secondary.as_deref_mut() {
            if matches!(button.poll(), Ok(true)) {
                let player = timer.press_secondary(now());
                info!("turn start (forced): player {}", player.number());
                feedback.start_tones(player);
                display.show_countdown(player, timer.turn_seconds())?;
                let _ = button.wait_release();
            }
        }

        match timer.tick(now()) {
            Some(tick) => {
                feedback.show_level(tick.level);
                if let Some(remaining_s) = tick.render_second {
                    display.show_countdown(timer.active_player(), remaining_s)?;
                }
                if tick.expired {
                    warn!(
                        "player {} ran out of time",
                        timer.active_player().number()
                    );
                    feedback.set_leds(false, false, false);
                    feedback.timeout_alarm();
                    display.show_timeout()?;
                }
                yield_now().await;
            }
            // Idle / timed out: small sleep to reduce power
            None => Timer::after_millis(board::IDLE_POLL_MS).await,
        }
    }
}
