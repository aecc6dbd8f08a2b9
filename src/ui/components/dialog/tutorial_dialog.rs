//! First-run onboarding overlay

use super::base::{key_hint, message_lines, render_dialog, DialogConfig};
use crate::state::TUTORIAL_PAGES;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    Frame,
};

const MAX_WIDTH: u16 = 56;

pub fn render_tutorial_dialog(frame: &mut Frame, page: usize) {
    let Some((title, body)) = TUTORIAL_PAGES.get(page) else {
        return;
    };

    let mut lines = message_lines(body, MAX_WIDTH);
    lines.push(Line::from(""));
    // Page dots
    let dots: Vec<Span> = (0..TUTORIAL_PAGES.len())
        .map(|i| {
            if i == page {
                Span::styled("● ", Style::default().fg(Color::Cyan))
            } else {
                Span::styled("○ ", Style::default().fg(Color::DarkGray))
            }
        })
        .collect();
    lines.push(Line::from(dots));

    let last = page + 1 == TUTORIAL_PAGES.len();
    let hint = if last {
        key_hint(&[("Enter", "Mulai Sekarang"), ("←", "kembali")])
    } else {
        key_hint(&[("→", "lanjut"), ("←", "kembali"), ("Esc", "lewati")])
    };

    render_dialog(
        frame,
        DialogConfig {
            title,
            title_color: Color::Cyan,
            border_color: Color::Cyan,
            body: lines,
            hint: Some(hint),
            max_width: MAX_WIDTH,
        },
    );
}
