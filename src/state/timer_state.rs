//! Timer state structure and display formatting

use serde::{Deserialize, Serialize};

/// Highest minute value the countdown can hold
pub const MAX_MINUTES: u32 = 60;
/// Highest second value the countdown can hold
pub const MAX_SECONDS: u32 = 59;

/// Which field the up/down buttons adjust
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjustMode {
    Minutes,
    Seconds,
}

/// Countdown value plus running flag and adjust target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub minutes: u32,
    pub seconds: u32,
    pub running: bool,
    pub adjust_mode: AdjustMode,
}

impl TimerState {
    /// Create the power-on state: 00:00, stopped, adjusting minutes
    pub fn new() -> Self {
        Self {
            minutes: 0,
            seconds: 0,
            running: false,
            adjust_mode: AdjustMode::Minutes,
        }
    }

    /// Create a state at the given countdown value
    pub fn at(minutes: u32, seconds: u32) -> Self {
        Self {
            minutes,
            seconds,
            ..Self::new()
        }
    }

    /// Check if the countdown has reached 00:00
    pub fn is_zero(&self) -> bool {
        self.minutes == 0 && self.seconds == 0
    }

    /// Check if both fields are inside their ranges
    pub fn in_range(&self) -> bool {
        self.minutes <= MAX_MINUTES && self.seconds <= MAX_SECONDS
    }

    /// Format the countdown as `MM:SS`
    pub fn display_text(&self) -> String {
        format!("{:02}:{:02}", self.minutes, self.seconds)
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}
