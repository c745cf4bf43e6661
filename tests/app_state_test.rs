use countdown_watch::{
    services::{press, ButtonId, HapticMotor, VibePattern},
    state::{AppState, Phase},
    tasks::{tick_service_task, vibration_task},
};
use std::{
    sync::{Arc, Barrier},
    thread,
};
use tokio::time::{sleep, timeout, Duration};

fn test_state() -> Arc<AppState> {
    Arc::new(AppState::new(0, "127.0.0.1".to_string(), Duration::from_millis(1)))
}

/// Power on, set 0:01 in second mode and start
fn armed_one_second(state: &AppState) {
    press(state, ButtonId::Select).unwrap();
    press(state, ButtonId::Up).unwrap();
    press(state, ButtonId::Select).unwrap();
}

#[tokio::test]
async fn test_initial_display() {
    let state = test_state();
    assert_eq!(state.display_text(), "00:00");
    let snapshot = state.snapshot().unwrap();
    assert_eq!(snapshot.phase, Phase::StoppedMinuteMode);
    assert_eq!(state.get_alarm_info(), (0, None));
}

#[tokio::test]
async fn test_alarm_broadcast_once_per_expiry() {
    let state = test_state();
    let mut alarms = state.subscribe_alarms();
    armed_one_second(&state);

    let first = state.tick().unwrap();
    assert_eq!(first.display, "00:00");
    assert!(first.state.running);
    assert!(alarms.try_recv().is_err());

    let second = state.tick().unwrap();
    assert!(!second.state.running);
    let alarm = alarms.try_recv().expect("alarm");
    assert_eq!(alarm.sequence, 1);

    state.tick().unwrap();
    assert!(alarms.try_recv().is_err());

    let (count, last) = state.get_alarm_info();
    assert_eq!(count, 1);
    assert_eq!(last, Some(alarm.fired_at));
}

#[tokio::test]
async fn test_display_updates_on_adjust_only_when_stopped() {
    let state = test_state();
    let mut display = state.subscribe_display();

    press(&state, ButtonId::Up).unwrap();
    assert!(display.has_changed().unwrap());
    assert_eq!(*display.borrow_and_update(), "01:00");

    press(&state, ButtonId::Select).unwrap();
    press(&state, ButtonId::Select).unwrap();
    press(&state, ButtonId::Down).unwrap();
    assert!(!display.has_changed().unwrap());

    let (action, time) = state.get_last_action();
    assert_eq!(action.as_deref(), Some("down"));
    assert!(time.is_some());
}

#[tokio::test]
async fn test_tick_service_drives_countdown() {
    let state = test_state();
    let motor = HapticMotor::new();
    let pattern = VibePattern::new(&[1, 1, 1]);

    tokio::spawn(vibration_task(Arc::clone(&state), motor.clone(), pattern));
    // let the vibration task subscribe before the alarm can fire
    sleep(Duration::from_millis(20)).await;

    armed_one_second(&state);
    tokio::spawn(tick_service_task(Arc::clone(&state), Duration::from_millis(5)));

    timeout(Duration::from_secs(5), async {
        while motor.patterns_played() == 0 {
            sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("alarm pattern played");

    // stopped after expiry, no second pattern follows
    sleep(Duration::from_millis(50)).await;
    assert_eq!(motor.patterns_played(), 1);
    assert_eq!(state.get_alarm_info().0, 1);
    assert_eq!(state.snapshot().unwrap().phase, Phase::StoppedSecondMode);
    assert_eq!(state.display_text(), "00:00");
}

#[test]
fn test_display_matches_state_under_concurrent_clicks() {
    const THREADS: usize = 8;

    for _ in 0..200 {
        let state = test_state();
        for _ in 0..30 {
            state.adjust_up().unwrap();
        }

        let barrier = Arc::new(Barrier::new(THREADS));
        let workers: Vec<_> = (0..THREADS)
            .map(|i| {
                let state = Arc::clone(&state);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    for _ in 0..5 {
                        if i % 2 == 0 {
                            state.adjust_up().unwrap();
                        } else {
                            state.adjust_down().unwrap();
                        }
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }

        assert_eq!(state.snapshot().unwrap().display, state.display_text());
    }
}
