use axum::{
    body::{self, Body, Bytes},
    http::{Request, StatusCode},
    Router,
};
use countdown_watch::{
    api::{
        create_router,
        responses::{ButtonResponse, DisplayResponse, HealthResponse, StatusResponse},
    },
    state::{AppState, Phase},
};
use serde::de::DeserializeOwned;
use std::{sync::Arc, time::Duration};
use tower::ServiceExt;

fn test_app() -> (Router, Arc<AppState>) {
    test_app_with_repeat(Duration::from_millis(1))
}

fn test_app_with_repeat(repeat: Duration) -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(20554, "127.0.0.1".to_string(), repeat));
    (create_router(Arc::clone(&state)), state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Bytes) {
    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let body = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, body)
}

fn json<T: DeserializeOwned>(body: &[u8]) -> T {
    serde_json::from_slice(body).expect("json")
}

fn post(uri: &str) -> Request<Body> {
    Request::post(uri).body(Body::empty()).expect("request")
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("request")
}

#[tokio::test]
async fn health_reports_ok() {
    let (app, _state) = test_app();
    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    let health: HealthResponse = json(&body);
    assert_eq!(health.status, "ok");
}

#[tokio::test]
async fn press_up_then_read_display() {
    let (app, _state) = test_app();

    let (status, body) = send(&app, post("/button/up/press")).await;
    assert_eq!(status, StatusCode::OK);
    let response: ButtonResponse = json(&body);
    assert_eq!(response.clicks, 1);
    assert_eq!(response.timer.display, "01:00");

    let (_, body) = send(&app, get("/display")).await;
    let display: DisplayResponse = json(&body);
    assert_eq!(display.text, "01:00");
}

#[tokio::test]
async fn select_presses_walk_the_phases() {
    let (app, _state) = test_app();

    let mut phases = Vec::new();
    for _ in 0..3 {
        let (_, body) = send(&app, post("/button/select/press")).await;
        let response: ButtonResponse = json(&body);
        phases.push(response.timer.phase);
    }
    assert_eq!(
        phases,
        vec![Phase::StoppedSecondMode, Phase::Running, Phase::StoppedSecondMode]
    );
}

#[tokio::test]
async fn hold_repeats_and_select_hold_is_rejected() {
    let (app, _state) = test_app();

    send(&app, post("/button/select/press")).await;
    let (status, body) = send(&app, post("/button/up/hold?ms=61")).await;
    assert_eq!(status, StatusCode::OK);
    let response: ButtonResponse = json(&body);
    assert_eq!(response.clicks, 62);
    assert_eq!(response.timer.display, "01:02");

    let (status, _) = send(&app, post("/button/select/hold")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_button_is_not_found() {
    let (app, _state) = test_app();
    let (status, _) = send(&app, post("/button/back/press")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn status_reports_alarms_and_last_action() {
    let (app, state) = test_app();

    send(&app, post("/button/select/press")).await;
    send(&app, post("/button/up/press")).await;
    send(&app, post("/button/select/press")).await;
    state.tick().unwrap();
    state.tick().unwrap();

    let (status, body) = send(&app, get("/status")).await;
    assert_eq!(status, StatusCode::OK);
    let status: StatusResponse = json(&body);
    assert_eq!(status.alarms_fired, 1);
    assert!(status.last_alarm_time.is_some());
    assert_eq!(status.last_action.as_deref(), Some("select"));
    assert_eq!(status.timer.display, "00:00");
    assert!(!status.timer.state.running);
    assert_eq!(status.port, 20554);
}

#[tokio::test]
async fn hold_without_ms_lasts_one_second() {
    let (app, _state) = test_app_with_repeat(Duration::from_millis(200));

    let started = std::time::Instant::now();
    let (status, body) = send(&app, post("/button/up/hold")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(started.elapsed() >= Duration::from_millis(1000));

    let response: ButtonResponse = json(&body);
    assert_eq!(response.clicks, 1000 / 200 + 1);
    assert_eq!(response.timer.display, "06:00");
}

#[tokio::test]
async fn overlong_hold_is_rejected_without_clicks() {
    let (app, state) = test_app();

    let (status, _) = send(&app, post("/button/up/hold?ms=18446744073709551615")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, post("/button/down/hold?ms=60001")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(state.display_text(), "00:00");
    assert!(state.get_last_action().0.is_none());
}
