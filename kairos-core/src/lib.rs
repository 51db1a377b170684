//! Board-agnostic core logic for the Kairos turn timer
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Wraparound-safe millisecond clock arithmetic
//! - Turn-timer state machine (idle / running / timed out)
//! - Configuration type definitions and boot-time validation
//! - Screen text composition for the 16x2 character display
//! - Hardware abstraction traits (display, LEDs, sounder)

#![no_std]
#![deny(unsafe_code)]

// Host-side tests (proptest) need std
#[cfg(test)]
#[macro_use]
extern crate std;

pub mod clock;
pub mod config;
pub mod screen;
pub mod timer;
pub mod traits;
