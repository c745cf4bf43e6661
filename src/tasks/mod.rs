//! Background tasks module
//! 
//! This module contains the host loops that run alongside the HTTP server.

pub mod display;
pub mod tick_service;
pub mod vibration;

// Re-export main functions
pub use display::display_task;
pub use tick_service::tick_service_task;
pub use vibration::vibration_task;
