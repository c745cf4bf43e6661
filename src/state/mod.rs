//! State management module
//! 
//! This module contains the countdown state machine and the shared host
//! state that feeds it events.

pub mod timer_state;
pub mod controller;
pub mod app_state;

// Re-export main types
pub use timer_state::{AdjustMode, TimerState};
pub use controller::{Effects, Phase, TimerController};
pub use app_state::{AlarmEvent, AppState, TimerSnapshot};
