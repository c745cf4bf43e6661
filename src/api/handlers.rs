//! HTTP endpoint handlers

use std::{sync::Arc, time::Duration};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::{
    services::{hold, press, ButtonId, MAX_HOLD},
    state::AppState,
};
use super::responses::{ButtonResponse, DisplayResponse, HealthResponse, StatusResponse};

/// Default hold length when `ms` is not given
const DEFAULT_HOLD_MS: u64 = 1000;

/// Query parameters for the hold endpoint
#[derive(Debug, Deserialize)]
pub struct HoldParams {
    pub ms: Option<u64>,
}

fn parse_button(name: &str) -> Result<ButtonId, StatusCode> {
    name.parse().map_err(|e| {
        warn!("{}", e);
        StatusCode::NOT_FOUND
    })
}

/// Handle POST /button/:button/press - Single click
pub async fn press_handler(
    State(state): State<Arc<AppState>>,
    Path(button): Path<String>,
) -> Result<Json<ButtonResponse>, StatusCode> {
    let button = parse_button(&button)?;

    match press(&state, button) {
        Ok(timer) => {
            info!("{} pressed - display {}", button, timer.display);
            Ok(Json(ButtonResponse::new(button, 1, timer)))
        }
        Err(e) => {
            error!("Failed to handle {} press: {}", button, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /button/:button/hold - Hold with auto-repeat
///
/// Holds longer than [`MAX_HOLD`] are rejected with 400.
pub async fn hold_handler(
    State(state): State<Arc<AppState>>,
    Path(button): Path<String>,
    Query(params): Query<HoldParams>,
) -> Result<Json<ButtonResponse>, StatusCode> {
    let button = parse_button(&button)?;
    if !button.repeats() {
        warn!("Hold requested on non-repeating button {}", button);
        return Err(StatusCode::BAD_REQUEST);
    }

    let duration = Duration::from_millis(params.ms.unwrap_or(DEFAULT_HOLD_MS));
    if duration > MAX_HOLD {
        warn!("Hold of {:?} on {} exceeds the {:?} limit", duration, button, MAX_HOLD);
        return Err(StatusCode::BAD_REQUEST);
    }
    match hold(Arc::clone(&state), button, duration).await {
        Ok((timer, clicks)) => {
            info!("{} held for {:?} ({} clicks) - display {}", button, duration, clicks, timer.display);
            Ok(Json(ButtonResponse::new(button, clicks, timer)))
        }
        Err(e) => {
            error!("Failed to handle {} hold: {}", button, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /display - Current display text
pub async fn display_handler(State(state): State<Arc<AppState>>) -> Json<DisplayResponse> {
    Json(DisplayResponse {
        text: state.display_text(),
    })
}

/// Handle GET /status - Return current timer status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let timer = match state.snapshot() {
        Ok(t) => t,
        Err(e) => {
            error!("Failed to get timer state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (alarms_fired, last_alarm_time) = state.get_alarm_info();
    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        timer,
        alarms_fired,
        last_alarm_time,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
