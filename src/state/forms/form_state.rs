//! Lesson form state and its transition function

use super::field::{Control, FieldId, IdeaKind};
use crate::state::document::Competencies;
use crate::state::registry::{
    grade_options, major_options, phase_code, DeliveryMode, Dimension, Pedagogy, Stage,
    TargetStudents, MANUAL_MAJOR,
};
use crate::state::validation::ValidationErrors;
use crate::state::wizard::Step;
use std::collections::BTreeSet;

pub const MIN_MEETINGS: u8 = 1;
pub const MAX_MEETINGS: u8 = 10;

/// Every input collected by the wizard.
///
/// Fields are private so the grade/major/pedagogy invariants can only be
/// changed through [`LessonForm::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonForm {
    school_name: String,
    teacher_name: String,
    teacher_nip: String,
    principal_name: String,
    principal_nip: String,

    stage: Stage,
    grade: String,
    major: Option<String>,
    custom_major: String,
    subject: String,
    delivery_mode: DeliveryMode,
    target_students: TargetStudents,

    readiness: String,
    material_characteristics: String,
    partnerships: String,
    environment: String,
    digital_tools: String,

    outcome: String,
    objective: String,

    topic: String,
    meeting_count: u8,
    duration: String,
    pedagogies: Vec<Option<Pedagogy>>,
    dimensions: BTreeSet<Dimension>,
}

impl Default for LessonForm {
    fn default() -> Self {
        let stage = Stage::default();
        Self {
            school_name: String::new(),
            teacher_name: String::new(),
            teacher_nip: String::new(),
            principal_name: String::new(),
            principal_nip: String::new(),
            stage,
            grade: grade_options(stage)[0].to_string(),
            major: None,
            custom_major: String::new(),
            subject: String::new(),
            delivery_mode: DeliveryMode::default(),
            target_students: TargetStudents::default(),
            readiness: String::new(),
            material_characteristics: String::new(),
            partnerships: String::new(),
            environment: String::new(),
            digital_tools: String::new(),
            outcome: String::new(),
            objective: String::new(),
            topic: String::new(),
            meeting_count: MIN_MEETINGS,
            duration: String::new(),
            pedagogies: vec![None; MIN_MEETINGS as usize],
            dimensions: BTreeSet::new(),
        }
    }
}

/// A single user-visible change to the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    SetText(FieldId, String),
    SetStage(Stage),
    SetGrade(String),
    SetMajor(String),
    SetDeliveryMode(DeliveryMode),
    SetTargetStudents(TargetStudents),
    SetMeetingCount(u8),
    SetPedagogy { meeting: usize, pedagogy: Pedagogy },
    ToggleDimension(Dimension),
    ApplyIdea { kind: IdeaKind, text: String },
    ApplyExtraction(Competencies),
}

/// Context handed to ideation requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaContext {
    pub stage: Stage,
    pub grade: String,
    pub subject: String,
    pub topic: String,
}

/// Pure form of [`LessonForm::apply`]
pub fn transition(
    mut form: LessonForm,
    mut errors: ValidationErrors,
    action: FormAction,
) -> (LessonForm, ValidationErrors) {
    form.apply(action, &mut errors);
    (form, errors)
}

impl LessonForm {
    /// Apply an action, clearing the validation error of whatever it touched
    pub fn apply(&mut self, action: FormAction, errors: &mut ValidationErrors) {
        match action {
            FormAction::SetText(field, value) => {
                if let Some(slot) = self.text_mut(field) {
                    *slot = value;
                    errors.clear_field(field);
                }
            }
            FormAction::SetStage(stage) => {
                self.stage = stage;
                self.grade = grade_options(stage)[0].to_string();
                self.major = major_options(stage).first().map(|m| m.to_string());
                self.custom_major.clear();
                errors.clear_field(FieldId::CustomMajor);
            }
            FormAction::SetGrade(grade) => {
                if grade_options(self.stage).contains(&grade.as_str()) {
                    self.grade = grade;
                }
            }
            FormAction::SetMajor(major) => {
                if major_options(self.stage).contains(&major.as_str()) {
                    self.major = Some(major);
                    errors.clear_field(FieldId::CustomMajor);
                }
            }
            FormAction::SetDeliveryMode(mode) => self.delivery_mode = mode,
            FormAction::SetTargetStudents(target) => self.target_students = target,
            FormAction::SetMeetingCount(count) => {
                self.meeting_count = count.clamp(MIN_MEETINGS, MAX_MEETINGS);
                self.pedagogies.resize(self.meeting_count as usize, None);
                if self.pedagogies_complete() {
                    errors.clear_field(FieldId::Pedagogies);
                }
            }
            FormAction::SetPedagogy { meeting, pedagogy } => {
                if meeting < self.meeting_count as usize {
                    if self.pedagogies.len() <= meeting {
                        self.pedagogies.resize(meeting + 1, None);
                    }
                    self.pedagogies[meeting] = Some(pedagogy);
                    if self.pedagogies_complete() {
                        errors.clear_field(FieldId::Pedagogies);
                    }
                }
            }
            FormAction::ToggleDimension(dimension) => {
                if !self.dimensions.remove(&dimension) {
                    self.dimensions.insert(dimension);
                }
                if !self.dimensions.is_empty() {
                    errors.clear_field(FieldId::Dimensions);
                }
            }
            FormAction::ApplyIdea { kind, text } => {
                self.apply(FormAction::SetText(kind.field(), text), errors);
            }
            FormAction::ApplyExtraction(extracted) => {
                self.outcome = extracted.outcome;
                self.objective = extracted.objective;
                errors.clear_field(FieldId::Outcome);
                errors.clear_field(FieldId::Objective);
            }
        }
    }

    /// Text value of a field (empty for composite fields)
    pub fn text(&self, field: FieldId) -> &str {
        match field {
            FieldId::SchoolName => &self.school_name,
            FieldId::TeacherName => &self.teacher_name,
            FieldId::TeacherNip => &self.teacher_nip,
            FieldId::PrincipalName => &self.principal_name,
            FieldId::PrincipalNip => &self.principal_nip,
            FieldId::Subject => &self.subject,
            FieldId::CustomMajor => &self.custom_major,
            FieldId::Readiness => &self.readiness,
            FieldId::MaterialCharacteristics => &self.material_characteristics,
            FieldId::Partnerships => &self.partnerships,
            FieldId::Environment => &self.environment,
            FieldId::DigitalTools => &self.digital_tools,
            FieldId::Outcome => &self.outcome,
            FieldId::Objective => &self.objective,
            FieldId::Topic => &self.topic,
            FieldId::Duration => &self.duration,
            FieldId::Pedagogies | FieldId::Dimensions => "",
        }
    }

    fn text_mut(&mut self, field: FieldId) -> Option<&mut String> {
        let slot = match field {
            FieldId::SchoolName => &mut self.school_name,
            FieldId::TeacherName => &mut self.teacher_name,
            FieldId::TeacherNip => &mut self.teacher_nip,
            FieldId::PrincipalName => &mut self.principal_name,
            FieldId::PrincipalNip => &mut self.principal_nip,
            FieldId::Subject => &mut self.subject,
            FieldId::CustomMajor => &mut self.custom_major,
            FieldId::Readiness => &mut self.readiness,
            FieldId::MaterialCharacteristics => &mut self.material_characteristics,
            FieldId::Partnerships => &mut self.partnerships,
            FieldId::Environment => &mut self.environment,
            FieldId::DigitalTools => &mut self.digital_tools,
            FieldId::Outcome => &mut self.outcome,
            FieldId::Objective => &mut self.objective,
            FieldId::Topic => &mut self.topic,
            FieldId::Duration => &mut self.duration,
            FieldId::Pedagogies | FieldId::Dimensions => return None,
        };
        Some(slot)
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn grade(&self) -> &str {
        &self.grade
    }

    pub fn major(&self) -> Option<&str> {
        self.major.as_deref()
    }

    pub fn delivery_mode(&self) -> DeliveryMode {
        self.delivery_mode
    }

    pub fn target_students(&self) -> TargetStudents {
        self.target_students
    }

    pub fn meeting_count(&self) -> u8 {
        self.meeting_count
    }

    pub fn pedagogies(&self) -> &[Option<Pedagogy>] {
        &self.pedagogies
    }

    pub fn dimensions(&self) -> &BTreeSet<Dimension> {
        &self.dimensions
    }

    /// Curriculum phase for the current stage and grade
    pub fn phase(&self) -> &'static str {
        phase_code(self.stage, &self.grade)
    }

    pub fn is_manual_major_selected(&self) -> bool {
        self.stage.has_majors() && self.major.as_deref() == Some(MANUAL_MAJOR)
    }

    /// Major to send to the backend: the manual override replaces the sentinel
    pub fn effective_major(&self) -> Option<&str> {
        if !self.stage.has_majors() {
            return None;
        }
        let custom = self.custom_major.trim();
        if self.is_manual_major_selected() && !custom.is_empty() {
            return Some(custom);
        }
        self.major.as_deref().filter(|m| !m.is_empty())
    }

    /// Pedagogy labels for the active meetings, in meeting order
    pub fn pedagogy_labels(&self) -> Vec<&'static str> {
        self.pedagogies
            .iter()
            .take(self.meeting_count as usize)
            .flatten()
            .map(|p| p.label())
            .collect()
    }

    pub fn dimension_labels(&self) -> Vec<&'static str> {
        self.dimensions.iter().map(|d| d.label()).collect()
    }

    /// True when every active meeting has a pedagogy selected
    pub fn pedagogies_complete(&self) -> bool {
        let count = self.meeting_count as usize;
        self.pedagogies.len() >= count && self.pedagogies[..count].iter().all(Option::is_some)
    }

    /// Context for ideation, or `None` while subject or topic is still empty
    pub fn ideation_context(&self) -> Option<IdeaContext> {
        if self.subject.trim().is_empty() || self.topic.trim().is_empty() {
            return None;
        }
        Some(IdeaContext {
            stage: self.stage,
            grade: self.grade.clone(),
            subject: self.subject.trim().to_string(),
            topic: self.topic.trim().to_string(),
        })
    }

    /// Controls shown on a step, in focus order
    pub fn controls(&self, step: Step) -> Vec<Control> {
        match step {
            Step::Identity => vec![
                Control::Text(FieldId::SchoolName),
                Control::Text(FieldId::TeacherName),
                Control::Text(FieldId::TeacherNip),
                Control::Text(FieldId::PrincipalName),
                Control::Text(FieldId::PrincipalNip),
            ],
            Step::Context => {
                let mut controls = vec![
                    Control::Stage,
                    Control::Grade,
                    Control::Text(FieldId::Subject),
                ];
                if self.stage.has_majors() {
                    controls.push(Control::Major);
                    if self.is_manual_major_selected() {
                        controls.push(Control::Text(FieldId::CustomMajor));
                    }
                }
                controls.push(Control::DeliveryMode);
                controls.push(Control::TargetStudents);
                controls
            }
            Step::Inspiration => IdeaKind::ALL
                .iter()
                .map(|k| Control::Text(k.field()))
                .collect(),
            Step::Competency => vec![
                Control::Text(FieldId::Outcome),
                Control::Text(FieldId::Objective),
            ],
            Step::Structure => {
                let mut controls = vec![
                    Control::Text(FieldId::Topic),
                    Control::MeetingCount,
                    Control::Text(FieldId::Duration),
                ];
                controls.extend((0..self.meeting_count as usize).map(Control::Pedagogy));
                controls.extend(Dimension::ALL.iter().copied().map(Control::Dimension));
                controls
            }
        }
    }

    /// Value shown for a control
    pub fn display_value(&self, control: Control) -> String {
        match control {
            Control::Text(field) => self.text(field).to_string(),
            Control::Stage => self.stage.label().to_string(),
            Control::Grade => format!("{} (Fase {})", self.grade, self.phase()),
            Control::Major => self.major.clone().unwrap_or_default(),
            Control::DeliveryMode => self.delivery_mode.label().to_string(),
            Control::TargetStudents => self.target_students.label().to_string(),
            Control::MeetingCount => self.meeting_count.to_string(),
            Control::Pedagogy(i) => self
                .pedagogies
                .get(i)
                .copied()
                .flatten()
                .map(|p| p.label().to_string())
                .unwrap_or_else(|| "Pilih Sintaks Pedagogi".to_string()),
            Control::Dimension(d) => {
                let mark = if self.dimensions.contains(&d) { "[x]" } else { "[ ]" };
                format!("{mark} {}", d.label())
            }
        }
    }
}
