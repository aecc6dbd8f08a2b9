//! Lesson form domain layer
//!
//! Field identifiers, focusable controls, and the form record with its
//! transition function.

mod field;
mod form_state;

pub use field::{Control, FieldId, IdeaKind};
pub use form_state::{
    transition, FormAction, IdeaContext, LessonForm, MAX_MEETINGS, MIN_MEETINGS,
};
