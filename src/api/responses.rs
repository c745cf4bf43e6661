//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{services::ButtonId, state::TimerSnapshot};

/// Response for button endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ButtonResponse {
    pub button: ButtonId,
    /// Clicks delivered to the controller (more than one for holds)
    pub clicks: u32,
    pub timestamp: DateTime<Utc>,
    pub timer: TimerSnapshot,
}

impl ButtonResponse {
    /// Create a new button response
    pub fn new(button: ButtonId, clicks: u32, timer: TimerSnapshot) -> Self {
        Self {
            button,
            clicks,
            timestamp: Utc::now(),
            timer,
        }
    }
}

/// Text on the display surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayResponse {
    pub text: String,
}

/// Full status response with alarm and server information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub timer: TimerSnapshot,
    pub alarms_fired: u64,
    pub last_alarm_time: Option<DateTime<Utc>>,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
