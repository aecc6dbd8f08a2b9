//! Error dialog component

use super::base::{key_hint, message_lines, render_dialog, DialogConfig};
use ratatui::{style::Color, Frame};

const MAX_WIDTH: u16 = 60;

/// Render an error dialog overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, error_message: &str, queued: usize) {
    let title = if queued > 1 {
        format!("Terjadi Kesalahan (1/{queued})")
    } else {
        "Terjadi Kesalahan".to_string()
    };

    render_dialog(
        frame,
        DialogConfig {
            title: &title,
            title_color: Color::Red,
            border_color: Color::Red,
            body: message_lines(error_message, MAX_WIDTH),
            hint: Some(key_hint(&[("Enter", "tutup"), ("Esc", "tutup")])),
            max_width: MAX_WIDTH,
        },
    );
}
