//! CP/TP import dialog: pasted text or a local file

use super::base::{key_hint, render_dialog, text_width, wrap_text, DialogConfig};
use crate::state::{ImportDialog, ImportFocus};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

const MAX_WIDTH: u16 = 72;
/// Pasted text is cut to its last few wrapped lines
const TEXT_PREVIEW_LINES: usize = 8;

fn heading(label: &str, active: bool) -> Line<'static> {
    let style = if active {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let marker = if active { "▸ " } else { "  " };
    Line::from(Span::styled(format!("{marker}{label}"), style))
}

pub fn render_import_dialog(frame: &mut Frame, dialog: &ImportDialog, busy: bool) {
    let width = text_width(MAX_WIDTH);
    let text_active = dialog.focus == ImportFocus::Text;
    let cursor = Span::styled("▌", Style::default().fg(Color::Cyan));

    let mut body = vec![heading("Tempel teks dokumen CP/TP", text_active)];
    let wrapped = wrap_text(&dialog.text, width);
    let skip = wrapped.len().saturating_sub(TEXT_PREVIEW_LINES);
    let count = wrapped.len() - skip;
    for (i, line) in wrapped.into_iter().skip(skip).enumerate() {
        let mut spans = vec![Span::raw(line)];
        if text_active && i + 1 == count {
            spans.push(cursor.clone());
        }
        body.push(Line::from(spans));
    }

    body.push(Line::from(""));
    body.push(heading("atau path berkas teks (.txt, .md)", !text_active));
    let mut path_spans = vec![Span::raw(dialog.path.clone())];
    if !text_active {
        path_spans.push(cursor);
    }
    body.push(Line::from(path_spans));

    if busy {
        body.push(Line::from(""));
        body.push(Line::from(Span::styled(
            "Sedang Mengekstrak...",
            Style::default().fg(Color::Yellow),
        )));
    }

    render_dialog(
        frame,
        DialogConfig {
            title: "Ambil CP/TP dari Dokumen",
            title_color: Color::Magenta,
            border_color: Color::Magenta,
            body,
            hint: Some(key_hint(&[
                ("Tab", "ganti input"),
                ("^S", "ekstrak"),
                ("Esc", "batal"),
            ])),
            max_width: MAX_WIDTH,
        },
    );
}
