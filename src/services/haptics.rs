//! Haptic motor service

use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};
use tokio::time::sleep;
use tracing::{debug, info};

/// Alternating on/off segment durations in milliseconds, starting with on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VibePattern {
    durations: &'static [u32],
}

/// Played when the countdown expires: 1000ms on, 500ms off, 1000ms on
pub const TIMER_PATTERN: VibePattern = VibePattern::new(&[1000, 500, 1000]);

impl VibePattern {
    pub const fn new(durations: &'static [u32]) -> Self {
        Self { durations }
    }

    pub fn durations(&self) -> &'static [u32] {
        self.durations
    }

    /// Iterate `(motor_on, duration)` segments
    pub fn segments(&self) -> impl Iterator<Item = (bool, Duration)> + '_ {
        self.durations
            .iter()
            .enumerate()
            .map(|(i, &ms)| (i % 2 == 0, Duration::from_millis(u64::from(ms))))
    }

    pub fn total(&self) -> Duration {
        self.segments().map(|(_, d)| d).sum()
    }
}

/// Simulated vibration motor
#[derive(Debug, Clone, Default)]
pub struct HapticMotor {
    patterns_played: Arc<AtomicU64>,
}

impl HapticMotor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of patterns played to completion
    pub fn patterns_played(&self) -> u64 {
        self.patterns_played.load(Ordering::SeqCst)
    }

    /// Play a pattern, holding the motor state for each segment
    pub async fn play(&self, pattern: &VibePattern) {
        info!("Vibrating for {:?}", pattern.total());
        for (on, duration) in pattern.segments() {
            debug!("Motor {} for {:?}", if on { "on" } else { "off" }, duration);
            sleep(duration).await;
        }
        debug!("Motor off");
        self.patterns_played.fetch_add(1, Ordering::SeqCst);
    }
}
