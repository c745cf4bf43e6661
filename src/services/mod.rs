//! Simulated host services module
//! 
//! This module contains the stand-ins for the watch platform: button input,
//! the haptic motor and the display surface.

pub mod display;
pub mod haptics;
pub mod input;

// Re-export main types and functions
pub use display::render_face;
pub use haptics::{HapticMotor, VibePattern, TIMER_PATTERN};
pub use input::{hold, press, ButtonId, MAX_HOLD};
