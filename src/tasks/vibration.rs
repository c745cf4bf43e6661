//! Alarm vibration background task

use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};

use crate::{
    services::{HapticMotor, VibePattern},
    state::AppState,
};

/// Background task that plays `pattern` once for every alarm
pub async fn vibration_task(state: Arc<AppState>, motor: HapticMotor, pattern: VibePattern) {
    info!("Starting vibration task");

    let mut alarm_rx = state.subscribe_alarms();

    loop {
        match alarm_rx.recv().await {
            Ok(alarm) => {
                info!("Alarm #{} fired at {}", alarm.sequence, alarm.fired_at);
                motor.play(&pattern).await;
            }
            Err(RecvError::Lagged(skipped)) => {
                warn!("Vibration task lagged, {} alarms dropped", skipped);
            }
            Err(RecvError::Closed) => {
                info!("Alarm channel closed, stopping vibration task");
                break;
            }
        }
    }
}
