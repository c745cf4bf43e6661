//! Button input service

use std::{fmt, str::FromStr, sync::Arc, time::Duration};
use serde::{Deserialize, Serialize};
use tokio::time::sleep;
use tracing::debug;

use crate::state::{AppState, TimerSnapshot};

/// Physical buttons on the watch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonId {
    Up,
    Down,
    Select,
}

impl ButtonId {
    pub fn name(&self) -> &'static str {
        match self {
            ButtonId::Up => "up",
            ButtonId::Down => "down",
            ButtonId::Select => "select",
        }
    }

    /// Up and down auto-repeat while held, select fires once
    pub fn repeats(&self) -> bool {
        !matches!(self, ButtonId::Select)
    }
}

impl fmt::Display for ButtonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ButtonId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" => Ok(ButtonId::Up),
            "down" => Ok(ButtonId::Down),
            "select" => Ok(ButtonId::Select),
            other => Err(format!("Unknown button: {}", other)),
        }
    }
}

/// Deliver a single click to the controller
pub fn press(state: &AppState, button: ButtonId) -> Result<TimerSnapshot, String> {
    match button {
        ButtonId::Up => state.adjust_up(),
        ButtonId::Down => state.adjust_down(),
        ButtonId::Select => state.start_stop(),
    }
}

/// Longest hold accepted, one full minute of auto-repeat
pub const MAX_HOLD: Duration = Duration::from_secs(60);

/// Shortest auto-repeat interval, shared by the click count and the sleep
const MIN_REPEAT: Duration = Duration::from_millis(1);

/// Number of clicks a hold of `duration` produces: one on press, then one
/// per elapsed repeat interval
pub fn clicks_for_hold(duration: Duration, repeat: Duration) -> u32 {
    let extra = duration.as_millis() / repeat.max(MIN_REPEAT).as_millis();
    1 + u32::try_from(extra).unwrap_or(u32::MAX - 1)
}

/// Hold a repeating button down for `duration`, at most [`MAX_HOLD`].
///
/// Returns the final snapshot and the number of clicks delivered.
pub async fn hold(
    state: Arc<AppState>,
    button: ButtonId,
    duration: Duration,
) -> Result<(TimerSnapshot, u32), String> {
    if !button.repeats() {
        return Err(format!("Button {} does not repeat", button));
    }
    if duration > MAX_HOLD {
        return Err(format!("Hold of {:?} exceeds the {:?} limit", duration, MAX_HOLD));
    }

    let repeat = state.button_repeat.max(MIN_REPEAT);
    let clicks = clicks_for_hold(duration, repeat);
    debug!("Holding {} for {:?}: {} clicks every {:?}", button, duration, clicks, repeat);

    let mut snapshot = press(&state, button)?;
    for _ in 1..clicks {
        sleep(repeat).await;
        snapshot = press(&state, button)?;
    }

    Ok((snapshot, clicks))
}
