//! Kairos - Two-Player Turn Timer Firmware
//!
//! Main firmware binary for Raspberry Pi Pico boards: counts down each
//! player's turn, drives the green/yellow/red warning LEDs and buzzer
//! cues, and mirrors the state on a 16x2 I2C character display.
//!
//! Named after the Greek "kairos" meaning "the opportune moment" -
//! the instant a turn has to end and the next player takes over.

#![no_std]
#![no_main]

use defmt::{error, info};
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::pwm::Pwm;
use embassy_time::{Delay, Timer};
use {defmt_rtt as _, panic_probe as _};

use kairos_core::timer::TurnTimer;
use kairos_core::traits::CharacterDisplay;
use kairos_drivers::button::DebouncedButton;
use kairos_drivers::feedback::{Feedback, LedBank, PwmBuzzer};
use kairos_drivers::lcd::Hd44780;

mod board;
mod run;
mod tone;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Kairos firmware starting...");

    let p = embassy_rp::init(Default::default());

    // Boot-time assertion: a malformed config is a build mistake
    if let Err(e) = board::TIMER.validate() {
        defmt::panic!("invalid timer config: {}", e);
    }

    // 16x2 display behind a PCF8574 backpack on I2C0 (SDA=GP0, SCL=GP1)
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = board::I2C_FREQ_HZ;
    let bus = I2c::new_blocking(p.I2C0, p.PIN_1, p.PIN_0, i2c_config);
    let mut display = Hd44780::new(bus, board::LCD_ADDR, Delay);
    if display.init().is_err() {
        defmt::panic!("display init failed; check wiring and address");
    }

    let leds = LedBank::new(
        Output::new(p.PIN_16, Level::Low),
        Output::new(p.PIN_17, Level::Low),
        Output::new(p.PIN_18, Level::Low),
    );

    // Buzzer on GP13 (PWM slice 6, channel B)
    let buzzer = PwmBuzzer::new(
        tone::BuzzerPwm::new(Pwm::new_output_b(p.PWM_SLICE6, p.PIN_13, Default::default())),
        Delay,
    );
    let mut feedback = Feedback::new(leds, buzzer, Delay);

    let mut primary = DebouncedButton::new(Input::new(p.PIN_14, Pull::Up), Delay);
    let mut secondary = if board::TIMER.two_buttons {
        Some(DebouncedButton::new(Input::new(p.PIN_15, Pull::Up), Delay))
    } else {
        None
    };

    let mut timer = TurnTimer::new(board::TIMER);
    if let Err(e) = run::run(
        &mut timer,
        &mut display,
        &mut feedback,
        &mut primary,
        secondary.as_mut(),
    )
    .await
    {
        error!("display bus fault: {}", e);
    }

    // The loop only exits on a bus fault. Leave the table quiet: LEDs
    // off, buzzer silent, screen cleared.
    feedback.quiesce();
    let _ = display.clear();
    loop {
        Timer::after_secs(1).await;
    }
}
