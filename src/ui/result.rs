//! Generated document view

use super::components::wrap_text;
use crate::app::App;
use crate::report::{Cell, DocumentView, SectionBody, MEETING_HEADERS};
use chrono::Local;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn label_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn push_multiline(lines: &mut Vec<Line<'static>>, indent: &str, text: &str) {
    for part in text.lines() {
        lines.push(Line::from(format!("{indent}{part}")));
    }
}

/// Lines for the scrollable document
pub fn document_lines(view: &DocumentView) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for section in &view.sections {
        lines.push(Line::from(Span::styled(
            section.title.to_uppercase(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        match &section.body {
            SectionBody::Rows(rows) => {
                for row in rows {
                    lines.push(Line::from(Span::styled(row.label, label_style())));
                    match &row.value {
                        Cell::Text(text) => push_multiline(&mut lines, "  ", text),
                        Cell::List(items) => {
                            for item in items {
                                lines.push(Line::from(vec![
                                    Span::styled("  • ", Style::default().fg(Color::Cyan)),
                                    Span::raw(item.clone()),
                                ]));
                            }
                        }
                    }
                }
            }
            SectionBody::Meetings(meetings) => {
                for m in meetings {
                    lines.push(Line::from(Span::styled(
                        format!("Pertemuan {}", m.meeting),
                        Style::default().add_modifier(Modifier::BOLD),
                    )));
                    for (header, text) in MEETING_HEADERS[1..]
                        .iter()
                        .zip([&m.understand, &m.apply, &m.reflect])
                    {
                        lines.push(Line::from(Span::styled(
                            format!("  {header}"),
                            label_style(),
                        )));
                        push_multiline(&mut lines, "    ", text);
                    }
                }
            }
        }
        lines.push(Line::from(""));
    }

    let sig = &view.signatures;
    lines.push(Line::from(Span::styled(
        "─".repeat(40),
        Style::default().fg(Color::DarkGray),
    )));
    for (heading, signatory) in [
        (sig.principal.role.to_string(), &sig.principal),
        (format!("{}\n{}", sig.place_date, sig.teacher.role), &sig.teacher),
    ] {
        push_multiline(&mut lines, "", &heading);
        lines.push(Line::from(Span::styled(
            signatory.name.to_uppercase(),
            Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )));
        lines.push(Line::from(format!("NIP. {}", signatory.nip)));
        lines.push(Line::from(""));
    }

    lines
}

/// Rows the document occupies once wrapped to `width` columns
fn wrapped_rows(lines: &[Line], width: usize) -> usize {
    lines
        .iter()
        .map(|line| {
            let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
            wrap_text(&text, width.max(1)).len()
        })
        .sum()
}

/// Largest scroll offset that still leaves the document end in view
pub fn max_scroll(area: Rect, app: &App) -> usize {
    let (Some(document), Some(form)) = (&app.state.document, &app.state.composed_from) else {
        return 0;
    };
    let view = DocumentView::build(document, form, Local::now().date_naive());
    let rows = wrapped_rows(&document_lines(&view), area.width.saturating_sub(2) as usize);
    rows.saturating_sub(area.height.saturating_sub(2) as usize)
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Perencanaan Pembelajaran Mendalam ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let (Some(document), Some(form)) = (&app.state.document, &app.state.composed_from) else {
        let message = Paragraph::new("Belum ada dokumen")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(message, area);
        return;
    };

    let view = DocumentView::build(document, form, Local::now().date_naive());
    let paragraph = Paragraph::new(document_lines(&view))
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.state.scroll_offset.min(u16::MAX as usize) as u16, 0));

    frame.render_widget(paragraph, area);
}
