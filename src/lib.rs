//! Countdown Watch - a wrist-watch countdown timer
//! 
//! The core is a small state machine driven by three buttons and a
//! one-second tick. Around it sits a simulated watch host: a tick service,
//! a haptic motor, a display surface and HTTP endpoints for the buttons.

pub mod config;
pub mod state;
pub mod api;
pub mod services;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::{AppState, TimerController, TimerState};
pub use api::create_router;
pub use utils::signals::shutdown_signal;
