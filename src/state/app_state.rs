//! Application state definitions

use super::busy::{BusySet, Operation};
use super::document::GeneratedDocument;
use super::forms::{Control, FieldId, FormAction, LessonForm, MAX_MEETINGS, MIN_MEETINGS};
use super::registry::{
    cycle_option, grade_options, major_options, DeliveryMode, Pedagogy, Stage, TargetStudents,
};
use super::wizard::Wizard;
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Wizard,
    Result,
}

/// Onboarding pages shown on first run (title, body)
pub const TUTORIAL_PAGES: [(&str, &str); 4] = [
    (
        "Selamat Datang!",
        "Gunakan AI untuk membuat Modul Ajar secara cepat dan tepat.",
    ),
    (
        "Sistem Tahapan",
        "Formulir dibagi menjadi 5 bagian agar pengisian lebih terarah.",
    ),
    (
        "Inspirasi AI ✨",
        "Tekan Ctrl+G pada kolom Inspirasi jika Anda butuh ide pengisian data.",
    ),
    (
        "Generate",
        "Hasil akan muncul setelah semua tahap selesai.",
    ),
];

/// Which input of the import dialog has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportFocus {
    #[default]
    Text,
    Path,
}

/// Import dialog for CP/TP extraction: pasted text or a local file path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportDialog {
    pub text: String,
    pub path: String,
    pub focus: ImportFocus,
}

impl ImportDialog {
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            ImportFocus::Text => ImportFocus::Path,
            ImportFocus::Path => ImportFocus::Text,
        };
    }

    pub fn input_char(&mut self, c: char) {
        match self.focus {
            ImportFocus::Text => self.text.push(c),
            ImportFocus::Path => self.path.push(c),
        }
    }

    /// Pasted text lands whole in the focused input. Paths are single-line.
    pub fn paste(&mut self, text: &str) {
        match self.focus {
            ImportFocus::Text => self.text.push_str(text),
            ImportFocus::Path => self.path.push_str(text.trim()),
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            ImportFocus::Text => self.text.pop(),
            ImportFocus::Path => self.path.pop(),
        };
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub view: View,
    pub wizard: Wizard,

    // UI state
    pub focus: usize,
    pub scroll_offset: usize,
    /// Largest useful offset for the current document and viewport
    pub scroll_max: usize,

    // Generation
    pub busy: BusySet,
    pub document: Option<GeneratedDocument>,
    /// Form snapshot the current document was composed from
    pub composed_from: Option<LessonForm>,

    // Overlays
    pub(crate) error_queue: VecDeque<String>,
    pub notice: Option<String>,
    pub tutorial: Option<usize>,
    pub import: Option<ImportDialog>,
}

impl AppState {
    /// Queue an error message for the error dialog
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.error_queue.push_back(message.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn error_count(&self) -> usize {
        self.error_queue.len()
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    pub fn is_busy(&self, op: Operation) -> bool {
        self.busy.is_busy(op)
    }

    /// Controls on the current step
    pub fn controls(&self) -> Vec<Control> {
        self.wizard.form().controls(self.wizard.step())
    }

    pub fn focused_control(&self) -> Option<Control> {
        self.controls().get(self.focus).copied()
    }

    pub fn next_focus(&mut self) {
        let count = self.controls().len();
        if count > 0 {
            self.focus = (self.focus + 1) % count;
        }
    }

    pub fn prev_focus(&mut self) {
        let count = self.controls().len();
        if count == 0 {
            return;
        }
        self.focus = if self.focus == 0 {
            count - 1
        } else {
            self.focus - 1
        };
    }

    /// Keep focus inside the control list after it shrinks
    pub fn clamp_focus(&mut self) {
        let count = self.controls().len();
        if self.focus >= count {
            self.focus = count.saturating_sub(1);
        }
    }

    /// Back to the top of the page after a step change
    pub fn reset_view_position(&mut self) {
        self.focus = 0;
        self.scroll_offset = 0;
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = (self.scroll_offset + 1).min(self.scroll_max);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down a page (10 lines)
    pub fn scroll_down_page(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(10).min(self.scroll_max);
    }

    /// Set the scroll bound, pulling the offset back if the document got shorter
    pub fn clamp_scroll(&mut self, max: usize) {
        self.scroll_max = max;
        self.scroll_offset = self.scroll_offset.min(max);
    }

    /// Scroll up a page (10 lines)
    pub fn scroll_up_page(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(10);
    }

    /// Form edit for a typed character on the focused text field
    pub fn text_input_action(&self, c: char) -> Option<FormAction> {
        match self.focused_control()? {
            Control::Text(field) => {
                let mut value = self.wizard.form().text(field).to_string();
                value.push(c);
                Some(FormAction::SetText(field, value))
            }
            _ => None,
        }
    }

    /// One edit for a whole paste; single-line fields get line breaks and tabs as spaces
    pub fn paste_action(&self, pasted: &str) -> Option<FormAction> {
        match self.focused_control()? {
            Control::Text(field) => {
                let mut value = self.wizard.form().text(field).to_string();
                if field.is_multiline() {
                    value.push_str(&pasted.replace("\r\n", "\n"));
                } else {
                    value.extend(pasted.trim_end().chars().map(|c| match c {
                        '\r' | '\n' | '\t' => ' ',
                        c => c,
                    }));
                }
                Some(FormAction::SetText(field, value))
            }
            _ => None,
        }
    }

    /// Newline is only accepted by multi-line fields
    pub fn newline_action(&self) -> Option<FormAction> {
        match self.focused_control()? {
            Control::Text(field) if field.is_multiline() => self.text_input_action('\n'),
            _ => None,
        }
    }

    pub fn backspace_action(&self) -> Option<FormAction> {
        match self.focused_control()? {
            Control::Text(field) => {
                let mut value = self.wizard.form().text(field).to_string();
                value.pop()?;
                Some(FormAction::SetText(field, value))
            }
            _ => None,
        }
    }

    /// Left/Right on a selection control
    pub fn cycle_action(&self, forward: bool) -> Option<FormAction> {
        let form = self.wizard.form();
        match self.focused_control()? {
            Control::Stage => {
                cycle_option(&Stage::ALL, Some(&form.stage()), forward).map(FormAction::SetStage)
            }
            Control::Grade => cycle_option(grade_options(form.stage()), Some(&form.grade()), forward)
                .map(|g| FormAction::SetGrade(g.to_string())),
            Control::Major => {
                let current = form.major();
                cycle_option(major_options(form.stage()), current.as_ref(), forward)
                    .map(|m| FormAction::SetMajor(m.to_string()))
            }
            Control::DeliveryMode => {
                cycle_option(&DeliveryMode::ALL, Some(&form.delivery_mode()), forward)
                    .map(FormAction::SetDeliveryMode)
            }
            Control::TargetStudents => {
                cycle_option(&TargetStudents::ALL, Some(&form.target_students()), forward)
                    .map(FormAction::SetTargetStudents)
            }
            Control::MeetingCount => {
                let count = form.meeting_count();
                let next = if forward {
                    count.saturating_add(1).min(MAX_MEETINGS)
                } else {
                    count.saturating_sub(1).max(MIN_MEETINGS)
                };
                (next != count).then_some(FormAction::SetMeetingCount(next))
            }
            Control::Pedagogy(meeting) => {
                let current = form.pedagogies().get(meeting).copied().flatten();
                cycle_option(&Pedagogy::ALL, current.as_ref(), forward)
                    .map(|pedagogy| FormAction::SetPedagogy { meeting, pedagogy })
            }
            Control::Text(_) | Control::Dimension(_) => None,
        }
    }

    /// Space on a dimension chip
    pub fn toggle_action(&self) -> Option<FormAction> {
        match self.focused_control()? {
            Control::Dimension(d) => Some(FormAction::ToggleDimension(d)),
            _ => None,
        }
    }

    /// Inspiration field under focus, if any
    pub fn focused_text_field(&self) -> Option<FieldId> {
        match self.focused_control()? {
            Control::Text(field) => Some(field),
            _ => None,
        }
    }

    /// Advance the tutorial; returns true when the last page was passed
    pub fn next_tutorial_page(&mut self) -> bool {
        match self.tutorial {
            Some(page) if page + 1 < TUTORIAL_PAGES.len() => {
                self.tutorial = Some(page + 1);
                false
            }
            Some(_) => true,
            None => false,
        }
    }

    pub fn prev_tutorial_page(&mut self) {
        if let Some(page) = self.tutorial {
            self.tutorial = Some(page.saturating_sub(1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::registry::{Dimension, MANUAL_MAJOR};
    use crate::state::wizard::Step;
    use pretty_assertions::assert_eq;

    fn apply(state: &mut AppState, action: Option<FormAction>) {
        if let Some(action) = action {
            state.wizard.dispatch(action);
        }
        state.clamp_focus();
    }

    fn focus_on(state: &mut AppState, control: Control) {
        state.focus = state
            .controls()
            .iter()
            .position(|c| *c == control)
            .unwrap();
    }

    #[test]
    fn test_error_queue_is_fifo() {
        let mut state = AppState::default();
        state.push_error("satu");
        state.push_error("dua");
        assert_eq!(state.error_count(), 2);
        assert_eq!(state.current_error(), Some("satu"));
        state.dismiss_error();
        assert_eq!(state.current_error(), Some("dua"));
        state.dismiss_error();
        assert!(!state.has_errors());
    }

    #[test]
    fn test_focus_wraps_both_ways() {
        let mut state = AppState::default();
        let count = state.controls().len();
        state.prev_focus();
        assert_eq!(state.focus, count - 1);
        state.next_focus();
        assert_eq!(state.focus, 0);
    }

    #[test]
    fn test_typing_edits_focused_field() {
        let mut state = AppState::default();
        for c in "SDN 1".chars() {
            let action = state.text_input_action(c);
            apply(&mut state, action);
        }
        assert_eq!(state.wizard.form().text(FieldId::SchoolName), "SDN 1");
        let action = state.backspace_action();
        apply(&mut state, action);
        assert_eq!(state.wizard.form().text(FieldId::SchoolName), "SDN ");
        assert_eq!(state.newline_action(), None);
    }

    #[test]
    fn test_backspace_on_empty_field_is_noop() {
        let state = AppState::default();
        assert_eq!(state.backspace_action(), None);
    }

    #[test]
    fn test_cycle_stage_and_major() {
        let mut state = AppState::default();
        state.wizard.dispatch(FormAction::SetText(FieldId::SchoolName, "S".into()));
        state.wizard.dispatch(FormAction::SetText(FieldId::TeacherName, "T".into()));
        state.wizard.dispatch(FormAction::SetText(FieldId::PrincipalName, "P".into()));
        state.wizard.advance();
        assert_eq!(state.wizard.step(), Step::Context);

        focus_on(&mut state, Control::Stage);
        let action = state.cycle_action(false);
        apply(&mut state, action);
        assert_eq!(state.wizard.form().stage(), Stage::Smk);

        focus_on(&mut state, Control::Major);
        let action = state.cycle_action(false);
        apply(&mut state, action);
        assert_eq!(state.wizard.form().major(), Some(MANUAL_MAJOR));
        assert!(state
            .controls()
            .contains(&Control::Text(FieldId::CustomMajor)));
    }

    #[test]
    fn test_selection_keys_ignored_on_text_fields() {
        let state = AppState::default();
        assert_eq!(state.cycle_action(true), None);
        assert_eq!(state.toggle_action(), None);
    }

    #[test]
    fn test_tutorial_paging() {
        let mut state = AppState {
            tutorial: Some(0),
            ..Default::default()
        };
        state.prev_tutorial_page();
        assert_eq!(state.tutorial, Some(0));
        assert!(!state.next_tutorial_page());
        assert!(!state.next_tutorial_page());
        assert!(!state.next_tutorial_page());
        assert_eq!(state.tutorial, Some(3));
        assert!(state.next_tutorial_page());
    }

    #[test]
    fn test_import_dialog_editing() {
        let mut dialog = ImportDialog::default();
        dialog.input_char('a');
        dialog.toggle_focus();
        dialog.input_char('/');
        dialog.input_char('x');
        dialog.backspace();
        assert_eq!(dialog.text, "a");
        assert_eq!(dialog.path, "/");
    }

    #[test]
    fn test_scroll_stops_at_bound() {
        let mut state = AppState::default();
        state.clamp_scroll(12);
        state.scroll_down_page();
        state.scroll_down_page();
        assert_eq!(state.scroll_offset, 12);
        state.scroll_down();
        assert_eq!(state.scroll_offset, 12);
        state.scroll_up();
        assert_eq!(state.scroll_offset, 11);
        state.clamp_scroll(4);
        assert_eq!(state.scroll_offset, 4);
    }

    #[test]
    fn test_import_dialog_paste_keeps_tabs_and_newlines() {
        let mut dialog = ImportDialog::default();
        dialog.paste("CP:\tMemahami\nTP: x");
        assert_eq!(dialog.text, "CP:\tMemahami\nTP: x");
        assert_eq!(dialog.focus, ImportFocus::Text);
        dialog.toggle_focus();
        dialog.paste(" /tmp/cp.txt\n");
        assert_eq!(dialog.path, "/tmp/cp.txt");
    }

    #[test]
    fn test_paste_into_single_line_field_flattens_breaks() {
        let state = AppState::default();
        // Step 1 opens on the school name field
        assert_eq!(
            state.paste_action("SMPN 2\tDepok\n"),
            Some(FormAction::SetText(FieldId::SchoolName, "SMPN 2 Depok".into()))
        );
    }

    #[test]
    fn test_dimension_toggle_on_structure_step() {
        let mut state = AppState::default();
        // Reach step 5 by filling every earlier step
        let fills = [
            (FieldId::SchoolName, "S"),
            (FieldId::TeacherName, "T"),
            (FieldId::PrincipalName, "P"),
            (FieldId::Subject, "IPA"),
            (FieldId::Readiness, "r"),
            (FieldId::MaterialCharacteristics, "m"),
            (FieldId::Partnerships, "p"),
            (FieldId::Environment, "e"),
            (FieldId::DigitalTools, "d"),
            (FieldId::Outcome, "Peserta didik mampu menjelaskan"),
            (FieldId::Objective, "Menjelaskan hal"),
        ];
        for (field, value) in fills {
            state
                .wizard
                .dispatch(FormAction::SetText(field, value.to_string()));
        }
        for _ in 0..4 {
            state.wizard.advance();
        }
        assert_eq!(state.wizard.step(), Step::Structure);

        focus_on(&mut state, Control::Dimension(Dimension::Communication));
        let action = state.toggle_action();
        apply(&mut state, action);
        assert!(state
            .wizard
            .form()
            .dimensions()
            .contains(&Dimension::Communication));

        focus_on(&mut state, Control::MeetingCount);
        assert_eq!(state.cycle_action(false), None);
        assert_eq!(state.cycle_action(true), Some(FormAction::SetMeetingCount(2)));
    }
}
