//! Shared host state wrapping the timer controller

use std::{
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, watch};
use tracing::{debug, info, warn};

use super::{Effects, Phase, TimerController, TimerState};

/// Emitted once per countdown expiry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlarmEvent {
    /// 1-based count of alarms since start
    pub sequence: u64,
    pub fired_at: DateTime<Utc>,
}

/// Point-in-time view of the controller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub display: String,
    pub state: TimerState,
    pub phase: Phase,
}

impl TimerSnapshot {
    fn of(controller: &TimerController) -> Self {
        Self {
            display: controller.display_text(),
            state: *controller.state(),
            phase: controller.phase(),
        }
    }
}

/// Main application state: the one controller plus host bookkeeping
#[derive(Debug)]
pub struct AppState {
    /// The only reference to the countdown state machine
    pub controller: Arc<Mutex<TimerController>>,
    /// Auto-repeat interval for held up/down buttons
    pub button_repeat: Duration,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last button action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
    /// Alarm bookkeeping
    pub alarm_count: Arc<Mutex<u64>>,
    pub last_alarm_time: Arc<Mutex<Option<DateTime<Utc>>>>,
    /// Display surface updates, latest text wins
    pub display_tx: watch::Sender<String>,
    /// Keep the receiver alive to prevent channel closure
    pub _display_rx: watch::Receiver<String>,
    /// Alarm notifications for the vibration task
    pub alarm_tx: broadcast::Sender<AlarmEvent>,
}

impl AppState {
    /// Create a new AppState with the controller at 00:00
    pub fn new(port: u16, host: String, button_repeat: Duration) -> Self {
        let controller = TimerController::new();
        let (display_tx, display_rx) = watch::channel(controller.display_text());
        let (alarm_tx, _) = broadcast::channel(16);

        Self {
            controller: Arc::new(Mutex::new(controller)),
            button_repeat,
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
            alarm_count: Arc::new(Mutex::new(0)),
            last_alarm_time: Arc::new(Mutex::new(None)),
            display_tx,
            _display_rx: display_rx,
            alarm_tx,
        }
    }

    /// Run one controller operation and publish its effects
    fn apply<F>(&self, action: Option<&str>, op: F) -> Result<TimerSnapshot, String>
    where
        F: FnOnce(&mut TimerController) -> Effects,
    {
        let mut controller = self.controller.lock()
            .map_err(|e| format!("Failed to lock timer controller: {}", e))?;

        let effects = op(&mut controller);
        let snapshot = TimerSnapshot::of(&controller);

        if let Some(action) = action {
            debug!("{} -> {} ({:?})", action, snapshot.display, snapshot.phase);
            if let Ok(mut last_action) = self.last_action.lock() {
                *last_action = Some(action.to_string());
            }
            if let Ok(mut last_time) = self.last_action_time.lock() {
                *last_time = Some(Utc::now());
            }
        }

        // Publish under the controller lock so the display never lags the state
        self.publish(effects)?;
        drop(controller);
        Ok(snapshot)
    }

    fn publish(&self, effects: Effects) -> Result<(), String> {
        if let Some(text) = effects.render {
            // send_replace never fails, even with no subscribers
            self.display_tx.send_replace(text);
        }

        if effects.alarm {
            let mut count = self.alarm_count.lock()
                .map_err(|e| format!("Failed to lock alarm count: {}", e))?;
            *count += 1;
            let event = AlarmEvent {
                sequence: *count,
                fired_at: Utc::now(),
            };
            drop(count);

            if let Ok(mut last_alarm) = self.last_alarm_time.lock() {
                *last_alarm = Some(event.fired_at);
            }

            info!("Countdown expired, alarm #{}", event.sequence);
            if let Err(e) = self.alarm_tx.send(event) {
                warn!("No listener for alarm notification: {}", e);
            }
        }

        Ok(())
    }

    /// Deliver one tick from the tick service
    pub fn tick(&self) -> Result<TimerSnapshot, String> {
        self.apply(None, TimerController::on_tick)
    }

    /// Up button click
    pub fn adjust_up(&self) -> Result<TimerSnapshot, String> {
        self.apply(Some("up"), TimerController::on_adjust_up)
    }

    /// Down button click
    pub fn adjust_down(&self) -> Result<TimerSnapshot, String> {
        self.apply(Some("down"), TimerController::on_adjust_down)
    }

    /// Select button click
    pub fn start_stop(&self) -> Result<TimerSnapshot, String> {
        let snapshot = self.apply(Some("select"), TimerController::on_start_stop_press)?;
        info!("Select pressed, timer is now {:?}", snapshot.phase);
        Ok(snapshot)
    }

    /// Get current controller snapshot
    pub fn snapshot(&self) -> Result<TimerSnapshot, String> {
        self.controller.lock()
            .map(|controller| TimerSnapshot::of(&controller))
            .map_err(|e| format!("Failed to lock timer controller: {}", e))
    }

    /// Text currently shown on the display surface
    pub fn display_text(&self) -> String {
        self.display_tx.borrow().clone()
    }

    pub fn subscribe_display(&self) -> watch::Receiver<String> {
        self.display_tx.subscribe()
    }

    pub fn subscribe_alarms(&self) -> broadcast::Receiver<AlarmEvent> {
        self.alarm_tx.subscribe()
    }

    /// Number of alarms fired and the time of the latest one
    pub fn get_alarm_info(&self) -> (u64, Option<DateTime<Utc>>) {
        let count = self.alarm_count.lock().map(|c| *c).unwrap_or(0);
        let last = self.last_alarm_time.lock().ok().and_then(|t| *t);
        (count, last)
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}
