//! Countdown Watch - a wrist-watch countdown timer
//!
//! This is the main entry point: it boots the simulated watch host and
//! serves the buttons over HTTP.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use countdown_watch::{
    config::Config,
    state::AppState,
    api::create_router,
    services::{HapticMotor, TIMER_PATTERN},
    tasks::{display_task, tick_service_task, vibration_task},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("countdown_watch={},tower_http=info", config.log_level()))
        .init();

    info!("Starting countdown-watch v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, tick={}ms, repeat={}ms",
          config.host, config.port, config.tick_ms, config.repeat_ms);

    // Create application state
    let state = Arc::new(AppState::new(config.port, config.host.clone(), config.button_repeat()));

    // Display first, so the initial 00:00 is rendered before anything else
    tokio::spawn(display_task(Arc::clone(&state), config.face));
    tokio::spawn(vibration_task(Arc::clone(&state), HapticMotor::new(), TIMER_PATTERN));
    tokio::spawn(tick_service_task(Arc::clone(&state), config.tick_period()));

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Watch running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /button/{{up,down,select}}/press - Single click");
    info!("  POST /button/{{up,down}}/hold?ms=N    - Hold with auto-repeat");
    info!("  GET  /display                        - Current display text");
    info!("  GET  /status                         - Timer and alarm status");
    info!("  GET  /health                         - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        result = shutdown_signal() => {
            result?;
            info!("Shutdown signal received");
        }
    }

    info!("Watch shutdown complete");
    Ok(())
}
