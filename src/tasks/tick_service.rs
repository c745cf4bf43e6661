//! Tick service background task

use std::{sync::Arc, time::Duration};
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{error, info, trace};

use crate::state::AppState;

/// Background task that delivers one tick to the controller per `period`
pub async fn tick_service_task(state: Arc<AppState>, period: Duration) {
    info!("Starting tick service task ({:?} per tick)", period);

    // First tick one full period after subscribing
    let mut interval = interval_at(Instant::now() + period, period);
    // Missed ticks are dropped, not replayed
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        interval.tick().await;

        match state.tick() {
            Ok(snapshot) if snapshot.state.running => {
                trace!("Tick: {}", snapshot.display);
            }
            Ok(_) => {}
            Err(e) => {
                error!("Failed to deliver tick: {}", e);
            }
        }
    }
}
