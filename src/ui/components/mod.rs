//! Reusable UI components

mod dialog;

pub use dialog::{render_error_dialog, render_import_dialog, render_tutorial_dialog, wrap_text};
