//! UI module for rendering the TUI

mod components;
mod layout;
mod result;
mod wizard;

use crate::app::App;
use crate::state::{Operation, View};
use components::{render_error_dialog, render_import_dialog, render_tutorial_dialog};
use ratatui::{layout::Rect, Frame};

/// Bound the result view scroll to the document drawn into `area`
pub fn sync_scroll(area: Rect, app: &mut App) {
    let (_, main_area, _) = layout::create_layout(area);
    let max = result::max_scroll(main_area, app);
    app.state.clamp_scroll(max);
}

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    match app.state.view {
        View::Wizard => wizard::draw(frame, main_area, app),
        View::Result => result::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Overlays, most urgent last so it ends up on top
    if let Some(dialog) = &app.state.import {
        render_import_dialog(frame, dialog, app.state.is_busy(Operation::Extract));
    }
    if let Some(page) = app.state.tutorial {
        render_tutorial_dialog(frame, page);
    }
    if let Some(message) = app.state.current_error() {
        render_error_dialog(frame, message, app.state.error_count());
    }
}
