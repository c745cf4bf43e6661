//! Countdown state machine driven by ticks and button clicks
//!
//! The controller is pure: every operation mutates the owned [`TimerState`]
//! and reports what the host should do next through [`Effects`]. Rendering,
//! vibration and timing all live in the host.

use serde::{Deserialize, Serialize};

use super::timer_state::{AdjustMode, TimerState, MAX_MINUTES, MAX_SECONDS};

/// Output of a single controller operation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Effects {
    /// New text for the display surface, if it changed
    pub render: Option<String>,
    /// Whether the alarm pattern must be played
    pub alarm: bool,
}

impl Effects {
    /// Nothing to do
    pub fn none() -> Self {
        Self::default()
    }

    fn render(text: String) -> Self {
        Self {
            render: Some(text),
            alarm: false,
        }
    }
}

/// Derived machine state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    StoppedMinuteMode,
    StoppedSecondMode,
    Running,
}

/// Owns the countdown and applies button and tick events to it
#[derive(Debug, Clone, Default)]
pub struct TimerController {
    state: TimerState,
}

impl TimerController {
    pub fn new() -> Self {
        Self {
            state: TimerState::new(),
        }
    }

    /// Build a controller around an existing state
    pub fn with_state(state: TimerState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn display_text(&self) -> String {
        self.state.display_text()
    }

    pub fn phase(&self) -> Phase {
        match (self.state.running, self.state.adjust_mode) {
            (true, _) => Phase::Running,
            (false, AdjustMode::Minutes) => Phase::StoppedMinuteMode,
            (false, AdjustMode::Seconds) => Phase::StoppedSecondMode,
        }
    }

    /// Advance the countdown by one second.
    ///
    /// Branch order matters: at 00:00 the alarm fires instead of borrowing
    /// from minutes.
    pub fn on_tick(&mut self) -> Effects {
        if !self.state.running {
            return Effects::none();
        }

        let mut alarm = false;
        if self.state.seconds > 0 {
            self.state.seconds -= 1;
        } else if self.state.minutes == 0 {
            self.state.running = false;
            alarm = true;
        } else {
            self.state.minutes -= 1;
            self.state.seconds = MAX_SECONDS;
        }

        Effects {
            render: Some(self.display_text()),
            alarm,
        }
    }

    /// Increase the selected field. Ignored while running.
    ///
    /// In second mode 59 wraps to 0 and carries into minutes. The carry is
    /// refused at 60:59 so the minute field never leaves its range.
    pub fn on_adjust_up(&mut self) -> Effects {
        if self.state.running {
            return Effects::none();
        }

        match self.state.adjust_mode {
            AdjustMode::Minutes => {
                if self.state.minutes < MAX_MINUTES {
                    self.state.minutes += 1;
                }
            }
            AdjustMode::Seconds => {
                if self.state.seconds < MAX_SECONDS {
                    self.state.seconds += 1;
                } else if self.state.minutes < MAX_MINUTES {
                    self.state.seconds = 0;
                    self.state.minutes += 1;
                }
            }
        }

        Effects::render(self.display_text())
    }

    /// Decrease the selected field. Ignored while running, floors at 00:00.
    pub fn on_adjust_down(&mut self) -> Effects {
        if self.state.running {
            return Effects::none();
        }

        match self.state.adjust_mode {
            AdjustMode::Minutes => {
                self.state.minutes = self.state.minutes.saturating_sub(1);
            }
            AdjustMode::Seconds => {
                if self.state.seconds > 0 {
                    self.state.seconds -= 1;
                } else if self.state.minutes > 0 {
                    self.state.seconds = MAX_SECONDS;
                    self.state.minutes -= 1;
                }
            }
        }

        Effects::render(self.display_text())
    }

    /// Handle the select button.
    ///
    /// The very first press only moves the adjust target to seconds. Every
    /// later press toggles running.
    pub fn on_start_stop_press(&mut self) -> Effects {
        match self.state.adjust_mode {
            AdjustMode::Minutes => self.state.adjust_mode = AdjustMode::Seconds,
            AdjustMode::Seconds => self.state.running = !self.state.running,
        }
        Effects::none()
    }
}
