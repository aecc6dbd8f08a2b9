//! Step controller for the five-step wizard

use super::forms::{transition, FormAction, LessonForm};
use super::validation::{validate, ValidationErrors};
use tracing::debug;

/// A wizard step, numbered 1 through 5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Step {
    #[default]
    Identity = 1,
    Context = 2,
    Inspiration = 3,
    Competency = 4,
    Structure = 5,
}

impl Step {
    pub const ALL: [Step; 5] = [
        Step::Identity,
        Step::Context,
        Step::Inspiration,
        Step::Competency,
        Step::Structure,
    ];

    pub const FIRST: Step = Step::Identity;
    pub const LAST: Step = Step::Structure;

    pub fn number(&self) -> u8 {
        *self as u8
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Identity => "Identitas",
            Self::Context => "Konteks",
            Self::Inspiration => "Inspirasi",
            Self::Competency => "Kompetensi",
            Self::Structure => "Pedagogi",
        }
    }

    /// Following step, saturating at the last one
    pub fn next(&self) -> Step {
        match self {
            Self::Identity => Self::Context,
            Self::Context => Self::Inspiration,
            Self::Inspiration => Self::Competency,
            Self::Competency | Self::Structure => Self::Structure,
        }
    }

    /// Preceding step, saturating at the first one
    pub fn prev(&self) -> Step {
        match self {
            Self::Identity | Self::Context => Self::Identity,
            Self::Inspiration => Self::Context,
            Self::Competency => Self::Inspiration,
            Self::Structure => Self::Competency,
        }
    }
}

/// Result of [`Wizard::advance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Validation passed; the view should reset scroll and focus
    Advanced(Step),
    /// Validation failed; errors are stored on the wizard
    Blocked,
}

/// Result of [`Wizard::submit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Ready(LessonForm),
    Invalid,
    NotFinalStep,
}

/// Current step, form and the errors displayed for that step
#[derive(Debug, Clone, Default)]
pub struct Wizard {
    step: Step,
    form: LessonForm,
    errors: ValidationErrors,
}

impl Wizard {
    pub fn step(&self) -> Step {
        self.step
    }

    pub fn form(&self) -> &LessonForm {
        &self.form
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn dispatch(&mut self, action: FormAction) {
        let form = std::mem::take(&mut self.form);
        let errors = std::mem::take(&mut self.errors);
        let (form, errors) = transition(form, errors, action);
        self.form = form;
        self.errors = errors;
    }

    pub fn advance(&mut self) -> StepOutcome {
        let errors = validate(self.step, &self.form);
        if !errors.is_empty() {
            debug!(
                step = self.step.number(),
                errors = errors.len(),
                fields = ?errors.fields().map(|f| f.key()).collect::<Vec<_>>(),
                "Advance blocked"
            );
            self.errors = errors;
            return StepOutcome::Blocked;
        }
        self.errors.clear();
        self.step = self.step.next();
        debug!(step = self.step.number(), "Advanced");
        StepOutcome::Advanced(self.step)
    }

    /// Go back one step without validating
    pub fn retreat(&mut self) -> Step {
        self.step = self.step.prev();
        self.errors.clear();
        debug!(step = self.step.number(), "Retreated");
        self.step
    }

    pub fn submit(&mut self) -> Submission {
        if self.step != Step::LAST {
            return Submission::NotFinalStep;
        }
        let errors = validate(Step::LAST, &self.form);
        if !errors.is_empty() {
            self.errors = errors;
            return Submission::Invalid;
        }
        self.errors.clear();
        Submission::Ready(self.form.clone())
    }

    /// Start over with an empty form at step 1
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
