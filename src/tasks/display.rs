//! Display surface background task

use std::sync::Arc;
use tracing::{debug, info};

use crate::{services::render_face, state::AppState};

/// Background task that renders every display update.
///
/// With `print_face` set the framed watch face is written to stdout as well.
pub async fn display_task(state: Arc<AppState>, print_face: bool) {
    info!("Starting display task");

    let mut display_rx = state.subscribe_display();
    let initial = display_rx.borrow_and_update().clone();
    show(&initial, print_face);

    while display_rx.changed().await.is_ok() {
        let text = display_rx.borrow_and_update().clone();
        show(&text, print_face);
    }

    debug!("Display channel closed, stopping display task");
}

fn show(text: &str, print_face: bool) {
    info!("Display: {}", text);
    if print_face {
        println!("{}", render_face(text));
    }
}
