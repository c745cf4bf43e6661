//! Display surface rendering

/// Inner width of the rendered watch face
const FACE_WIDTH: usize = 13;

/// Render the display text centered inside a framed watch face
pub fn render_face(text: &str) -> String {
    let border = "-".repeat(FACE_WIDTH);
    let blank = " ".repeat(FACE_WIDTH);
    format!(
        "+{border}+\n|{blank}|\n|{text:^width$}|\n|{blank}|\n+{border}+",
        width = FACE_WIDTH,
    )
}
