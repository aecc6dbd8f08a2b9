//! Layout components (header stepper, status bar)

use crate::app::App;
use crate::platform::{
    EXPORT_SHORTCUT, IDEA_SHORTCUT, IMPORT_SHORTCUT, NEW_PLAN_SHORTCUT, NEXT_SHORTCUT,
    PREV_SHORTCUT, SUBMIT_SHORTCUT,
};
use crate::state::{AppState, Step, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Split the screen into header, body and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Stepper line: finished steps in green, current in cyan
pub fn stepper_spans(current: Step) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for step in Step::ALL {
        if step != Step::FIRST {
            spans.push(Span::styled(" ─ ", Style::default().fg(Color::DarkGray)));
        }
        let (marker, style) = if step == current {
            (
                step.number().to_string(),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else if step < current {
            ("✓".to_string(), Style::default().fg(Color::Green))
        } else {
            (step.number().to_string(), Style::default().fg(Color::DarkGray))
        };
        spans.push(Span::styled(format!(" {marker} "), style));
        spans.push(Span::styled(
            format!(" {}", step.title()),
            if step == current {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            },
        ));
    }
    spans
}

pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let line = match state.view {
        View::Wizard => {
            let mut spans = stepper_spans(state.wizard.step());
            spans.push(Span::raw("   "));
            spans.push(Span::styled(
                format!("Fase {}", state.wizard.form().phase()),
                Style::default().fg(Color::Yellow),
            ));
            Line::from(spans)
        }
        View::Result => Line::from(Span::styled(
            "Modul Ajar Siap",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
    };

    let header = Paragraph::new(line).block(
        Block::default()
            .title(" RPM Wizard ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(header, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    let hints = view_hints(&app.state);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if app.state.busy.any() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            "Sedang Berpikir...",
            Style::default().fg(Color::Yellow),
        ));
    }

    if let Some(msg) = &app.state.notice {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let model_hint = format!(" {} ", app.model());
    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Model name on the right
    let width = model_hint.chars().count() as u16;
    let model_area = Rect {
        x: area.x + area.width.saturating_sub(width),
        y: area.y,
        width: width.min(area.width),
        height: 1,
    };
    let model_widget =
        Paragraph::new(model_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Black));
    frame.render_widget(model_widget, model_area);
}

/// Keyboard hints for the current view
pub fn view_hints(state: &AppState) -> String {
    match state.view {
        View::Wizard => {
            let step = state.wizard.step();
            let mut hints = vec!["Tab:pindah".to_string()];
            if state
                .focused_control()
                .is_some_and(|c| c.is_selection())
            {
                hints.push("←/→:pilih".to_string());
            }
            if step == Step::Inspiration {
                hints.push(format!("{IDEA_SHORTCUT}:ide AI"));
            }
            if step == Step::Competency {
                hints.push(format!("{IMPORT_SHORTCUT}:ambil dari dokumen"));
            }
            if step == Step::Structure {
                hints.push("Spasi:dimensi".to_string());
            }
            if step != Step::FIRST {
                hints.push(format!("{PREV_SHORTCUT}:kembali"));
            }
            if step == Step::LAST {
                hints.push(format!("{SUBMIT_SHORTCUT}:generate"));
            } else {
                hints.push(format!("{NEXT_SHORTCUT}:lanjut"));
            }
            hints.push("^C:keluar".to_string());
            hints.join("  ")
        }
        View::Result => format!(
            "j/k:gulir  d/u:halaman  {EXPORT_SHORTCUT}:salin ke Docs  {NEW_PLAN_SHORTCUT}:RPM baru  Esc:ubah data  ^C:keluar"
        ),
    }
}
