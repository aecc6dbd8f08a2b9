//! Wizard step form

use crate::app::App;
use crate::state::{Control, FieldId, LessonForm, Operation, ValidationErrors};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const MULTILINE_HEIGHT: u16 = 6;
const BOXED_HEIGHT: u16 = 3;

/// Error shown under a control. Grouped controls (pedagogies, dimensions)
/// only show it under the last member of the group.
fn error_for<'a>(
    controls: &[Control],
    index: usize,
    errors: &'a ValidationErrors,
) -> Option<&'a str> {
    let field = controls[index].error_field()?;
    let next_shares_field = controls
        .get(index + 1)
        .and_then(Control::error_field)
        .is_some_and(|f| f == field);
    if next_shares_field {
        return None;
    }
    errors.get(field)
}

fn control_height(control: Control) -> u16 {
    match control {
        Control::Text(field) if field.is_multiline() => MULTILINE_HEIGHT,
        Control::Dimension(_) => 1,
        _ => BOXED_HEIGHT,
    }
}

/// First control to render so that `focus` fits in `available` rows
pub fn first_visible(heights: &[u16], focus: usize, available: u16) -> usize {
    let Some(last) = heights.len().checked_sub(1) else {
        return 0;
    };
    let focus = focus.min(last);
    let mut start = focus;
    let mut used = heights[focus];
    while start > 0 && used + heights[start - 1] <= available {
        start -= 1;
        used += heights[start];
    }
    // Prefer showing from the top when everything up to focus fits
    if heights[..=focus].iter().sum::<u16>() <= available {
        0
    } else {
        start
    }
}

/// Subject and major labels depend on the school stage
fn control_label(form: &LessonForm, control: Control) -> String {
    match control {
        Control::Text(FieldId::Subject) => form.stage().subject_label().to_string(),
        Control::Major => form.stage().major_label().to_string(),
        _ => control.label(),
    }
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn draw_control(
    frame: &mut Frame,
    area: Rect,
    form: &LessonForm,
    control: Control,
    focused: bool,
    busy: bool,
) {
    let value = form.display_value(control);
    let cursor = Span::styled("▌", Style::default().fg(Color::Cyan));

    match control {
        Control::Dimension(_) => {
            let style = if focused {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else if value.starts_with("[x]") {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Gray)
            };
            frame.render_widget(Paragraph::new(Span::styled(format!(" {value}"), style)), area);
        }
        Control::Text(field) => {
            let mut title = format!(" {} ", control_label(form, control));
            if busy {
                title.push_str("· Sedang Berpikir... ");
            } else if focused && field.idea_kind().is_some() {
                title.push_str("· ^G Inspirasi AI ✨ ");
            }

            let mut lines: Vec<Line> = if value.is_empty() && !focused {
                vec![Line::from(Span::styled(
                    "(kosong)",
                    Style::default().fg(Color::DarkGray),
                ))]
            } else {
                value.split('\n').map(|l| Line::from(l.to_string())).collect()
            };
            if focused {
                match lines.last_mut() {
                    Some(last) => last.spans.push(cursor),
                    None => lines.push(Line::from(cursor)),
                }
            }

            // Keep the tail of long text in view
            let inner = area.height.saturating_sub(2) as usize;
            let skip = lines.len().saturating_sub(inner.max(1));
            let paragraph = Paragraph::new(lines.split_off(skip))
                .wrap(Wrap { trim: false })
                .block(
                    Block::default()
                        .title(title)
                        .borders(Borders::ALL)
                        .border_style(border_style(focused)),
                );
            frame.render_widget(paragraph, area);
        }
        _ => {
            let content = if focused {
                Line::from(vec![
                    Span::styled("◀ ", Style::default().fg(Color::Cyan)),
                    Span::styled(value, Style::default().add_modifier(Modifier::BOLD)),
                    Span::styled(" ▶", Style::default().fg(Color::Cyan)),
                ])
            } else {
                Line::from(value)
            };
            let paragraph = Paragraph::new(content).block(
                Block::default()
                    .title(format!(" {} ", control_label(form, control)))
                    .borders(Borders::ALL)
                    .border_style(border_style(focused)),
            );
            frame.render_widget(paragraph, area);
        }
    }
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let step = state.wizard.step();
    let form = state.wizard.form();
    let errors = state.wizard.errors();
    let controls = state.controls();

    let outer = Block::default()
        .title(format!(" Langkah {}: {} ", step.number(), step.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let heights: Vec<u16> = controls
        .iter()
        .enumerate()
        .map(|(i, c)| control_height(*c) + u16::from(error_for(&controls, i, errors).is_some()))
        .collect();
    let start = first_visible(&heights, state.focus, inner.height);

    let mut y = inner.y;
    let bottom = inner.y + inner.height;
    for (index, control) in controls.iter().enumerate().skip(start) {
        let height = control_height(*control);
        if y + height > bottom {
            break;
        }
        let busy = control
            .error_field()
            .and_then(|f| f.idea_kind())
            .is_some_and(|kind| state.is_busy(Operation::Idea(kind)));
        let rect = Rect {
            x: inner.x,
            y,
            width: inner.width,
            height,
        };
        draw_control(frame, rect, form, *control, index == state.focus, busy);
        y += height;

        if let Some(message) = error_for(&controls, index, errors) {
            if y < bottom {
                let rect = Rect {
                    x: inner.x,
                    y,
                    width: inner.width,
                    height: 1,
                };
                frame.render_widget(
                    Paragraph::new(Span::styled(
                        format!(" ⚠ {message}"),
                        Style::default().fg(Color::Red),
                    )),
                    rect,
                );
                y += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Dimension, FormAction, Stage};

    #[test]
    fn test_first_visible_keeps_top_when_it_fits() {
        assert_eq!(first_visible(&[3, 3, 3], 2, 9), 0);
    }

    #[test]
    fn test_first_visible_scrolls_to_focus() {
        assert_eq!(first_visible(&[3, 3, 3, 3], 3, 7), 2);
        assert_eq!(first_visible(&[6, 1, 1], 2, 3), 1);
        assert_eq!(first_visible(&[], 0, 10), 0);
    }

    #[test]
    fn test_labels_follow_stage() {
        let mut form = LessonForm::default();
        let mut errors = ValidationErrors::default();
        assert_eq!(control_label(&form, Control::Text(FieldId::Subject)), "Mata Pelajaran");
        form.apply(FormAction::SetStage(Stage::Smk), &mut errors);
        assert_eq!(
            control_label(&form, Control::Text(FieldId::Subject)),
            "Mata Pelajaran (Kejuruan/Umum)"
        );
        assert_eq!(control_label(&form, Control::Major), "Konsentrasi");
        assert_eq!(control_label(&form, Control::Stage), "Jenjang");
    }

    #[test]
    fn test_group_error_shown_once() {
        let controls = [
            Control::Text(FieldId::Topic),
            Control::Dimension(Dimension::Faith),
            Control::Dimension(Dimension::Health),
        ];
        let mut errors = ValidationErrors::default();
        errors.insert(FieldId::Dimensions, "Pilih minimal satu dimensi.");
        assert_eq!(error_for(&controls, 0, &errors), None);
        assert_eq!(error_for(&controls, 1, &errors), None);
        assert_eq!(
            error_for(&controls, 2, &errors),
            Some("Pilih minimal satu dimensi.")
        );
    }
}
