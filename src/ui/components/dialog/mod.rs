//! Dialog components for TUI

mod base;
mod error_dialog;
mod import_dialog;
mod tutorial_dialog;

pub use base::wrap_text;
pub use error_dialog::render_error_dialog;
pub use import_dialog::render_import_dialog;
pub use tutorial_dialog::render_tutorial_dialog;
