//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod display;
pub mod feedback;

pub use display::{CharacterDisplay, DisplayError, Screen};
pub use feedback::{LedPanel, Sounder};
