//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in kairos-core, generic over `embedded-hal` 1.0:
//!
//! - HD44780 character display behind a PCF8574 I2C expander
//! - Debounced push button
//! - Warning LED bank and PWM buzzer, with the feedback sequences
//!   (turn-start tones, timeout alarm) built on top

#![no_std]
#![deny(unsafe_code)]

pub mod button;
pub mod feedback;
pub mod lcd;
