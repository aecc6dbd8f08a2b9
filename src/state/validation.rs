//! Per-step validation of the lesson form

use super::forms::{FieldId, LessonForm};
use super::wizard::Step;
use std::collections::BTreeMap;

/// Minimum trimmed length of the learning outcome (CP)
pub const MIN_OUTCOME_CHARS: usize = 20;
/// Minimum trimmed length of the learning objective (TP)
pub const MIN_OBJECTIVE_CHARS: usize = 10;

/// Field-level error messages; empty means the step is valid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<FieldId, String>);

impl ValidationErrors {
    pub fn insert(&mut self, field: FieldId, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn clear_field(&mut self, field: FieldId) {
        self.0.remove(&field);
    }

    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldId) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.0.keys().copied()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn shorter_than(value: &str, min: usize) -> bool {
    value.trim().chars().count() < min
}

/// Validate only the fields that belong to `step`
pub fn validate(step: Step, form: &LessonForm) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    let mut require = |field: FieldId, message: &str| {
        if is_blank(form.text(field)) {
            errors.insert(field, message);
        }
    };

    match step {
        Step::Identity => {
            require(FieldId::SchoolName, "Nama Satuan Pendidikan wajib diisi.");
            require(FieldId::TeacherName, "Nama Guru wajib diisi.");
            require(FieldId::PrincipalName, "Nama Kepala Sekolah wajib diisi.");
        }
        Step::Context => {
            require(FieldId::Subject, "Mata Pelajaran wajib diisi.");
            if form.is_manual_major_selected() {
                require(FieldId::CustomMajor, "Keahlian wajib diisi.");
            }
        }
        Step::Inspiration => {
            require(FieldId::Readiness, "Kesiapan Peserta Didik wajib diisi.");
            require(FieldId::MaterialCharacteristics, "Karakteristik Materi wajib diisi.");
            require(FieldId::Partnerships, "Kemitraan wajib diisi.");
            require(FieldId::Environment, "Lingkungan wajib diisi.");
            require(FieldId::DigitalTools, "Pemanfaatan Digital wajib diisi.");
        }
        Step::Competency => {
            if shorter_than(form.text(FieldId::Outcome), MIN_OUTCOME_CHARS) {
                errors.insert(FieldId::Outcome, "CP wajib diisi secara lengkap.");
            }
            if shorter_than(form.text(FieldId::Objective), MIN_OBJECTIVE_CHARS) {
                errors.insert(FieldId::Objective, "TP wajib diisi secara lengkap.");
            }
        }
        Step::Structure => {
            require(FieldId::Topic, "Materi Pokok wajib diisi.");
            require(FieldId::Duration, "Durasi pertemuan wajib diisi.");
            if !form.pedagogies_complete() {
                errors.insert(FieldId::Pedagogies, "Pilih pedagogi tiap pertemuan.");
            }
            if form.dimensions().is_empty() {
                errors.insert(FieldId::Dimensions, "Pilih minimal satu dimensi.");
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::{transition, FormAction};
    use crate::state::registry::{Dimension, Pedagogy, Stage, MANUAL_MAJOR};
    use pretty_assertions::assert_eq;

    fn form_with(actions: Vec<FormAction>) -> LessonForm {
        actions
            .into_iter()
            .fold(
                (LessonForm::default(), ValidationErrors::default()),
                |(f, e), a| transition(f, e, a),
            )
            .0
    }

    fn text(field: FieldId, value: &str) -> FormAction {
        FormAction::SetText(field, value.to_string())
    }

    fn fields(errors: &ValidationErrors) -> Vec<FieldId> {
        errors.fields().collect()
    }

    #[test]
    fn test_identity_requires_names_not_nips() {
        let errors = validate(Step::Identity, &LessonForm::default());
        assert_eq!(
            fields(&errors),
            vec![FieldId::SchoolName, FieldId::TeacherName, FieldId::PrincipalName]
        );
        assert_eq!(
            errors.get(FieldId::SchoolName),
            Some("Nama Satuan Pendidikan wajib diisi.")
        );

        let form = form_with(vec![
            text(FieldId::SchoolName, "SDN 1 Bandung"),
            text(FieldId::TeacherName, "Siti"),
            text(FieldId::PrincipalName, "Budi"),
        ]);
        assert!(validate(Step::Identity, &form).is_empty());
    }

    #[test]
    fn test_whitespace_only_is_blank() {
        let form = form_with(vec![text(FieldId::Subject, "   \n\t")]);
        assert!(validate(Step::Context, &form).contains(FieldId::Subject));
    }

    #[test]
    fn test_context_requires_override_only_for_sentinel() {
        let form = form_with(vec![
            text(FieldId::Subject, "Informatika"),
            FormAction::SetStage(Stage::Smk),
        ]);
        assert!(validate(Step::Context, &form).is_empty());

        let form = form_with(vec![
            text(FieldId::Subject, "Informatika"),
            FormAction::SetStage(Stage::Smk),
            FormAction::SetMajor(MANUAL_MAJOR.into()),
        ]);
        let errors = validate(Step::Context, &form);
        assert_eq!(fields(&errors), vec![FieldId::CustomMajor]);
        assert_eq!(errors.get(FieldId::CustomMajor), Some("Keahlian wajib diisi."));
    }

    #[test]
    fn test_inspiration_requires_all_five() {
        let form = form_with(vec![
            text(FieldId::Readiness, "Siap"),
            text(FieldId::Environment, "Kelas"),
        ]);
        assert_eq!(
            fields(&validate(Step::Inspiration, &form)),
            vec![
                FieldId::MaterialCharacteristics,
                FieldId::Partnerships,
                FieldId::DigitalTools
            ]
        );
    }

    #[test]
    fn test_short_outcome_flags_only_outcome() {
        let form = form_with(vec![
            text(FieldId::Outcome, "Siswa paham"),
            text(FieldId::Objective, "Menjelaskan pecahan"),
        ]);
        let errors = validate(Step::Competency, &form);
        assert_eq!(fields(&errors), vec![FieldId::Outcome]);
        assert_eq!(errors.get(FieldId::Outcome), Some("CP wajib diisi secara lengkap."));
    }

    #[test]
    fn test_competency_thresholds_count_trimmed_chars() {
        let form = form_with(vec![
            text(FieldId::Outcome, "  12345678901234567890  "),
            text(FieldId::Objective, " 123456789 "),
        ]);
        assert_eq!(
            fields(&validate(Step::Competency, &form)),
            vec![FieldId::Objective]
        );
    }

    #[test]
    fn test_structure_valid_with_single_meeting() {
        let form = form_with(vec![
            text(FieldId::Topic, "Pecahan"),
            text(FieldId::Duration, "2 x 35 menit"),
            FormAction::SetPedagogy {
                meeting: 0,
                pedagogy: Pedagogy::ProjectBased,
            },
            FormAction::ToggleDimension(Dimension::Creativity),
        ]);
        assert!(validate(Step::Structure, &form).is_empty());
    }

    #[test]
    fn test_structure_gap_in_pedagogies_is_error() {
        let form = form_with(vec![
            text(FieldId::Topic, "Pecahan"),
            text(FieldId::Duration, "2 x 35 menit"),
            FormAction::SetMeetingCount(3),
            FormAction::SetPedagogy {
                meeting: 0,
                pedagogy: Pedagogy::Inquiry,
            },
            FormAction::SetPedagogy {
                meeting: 2,
                pedagogy: Pedagogy::Station,
            },
            FormAction::ToggleDimension(Dimension::Health),
        ]);
        let errors = validate(Step::Structure, &form);
        assert_eq!(fields(&errors), vec![FieldId::Pedagogies]);
    }

    #[test]
    fn test_structure_empty_dimensions() {
        let form = form_with(vec![
            FormAction::ToggleDimension(Dimension::Health),
            FormAction::ToggleDimension(Dimension::Health),
        ]);
        let errors = validate(Step::Structure, &form);
        assert_eq!(errors.get(FieldId::Dimensions), Some("Pilih minimal satu dimensi."));
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_validation_is_per_step() {
        let form = form_with(vec![
            text(FieldId::SchoolName, "SDN 1"),
            text(FieldId::TeacherName, "Siti"),
            text(FieldId::PrincipalName, "Budi"),
        ]);
        assert!(validate(Step::Identity, &form).is_empty());
        assert!(!validate(Step::Context, &form).is_empty());
    }
}
