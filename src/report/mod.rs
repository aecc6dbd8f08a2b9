//! Result presentation: display structure plus export renderings

mod html;
mod view;

pub use html::{to_html, to_plain_text};
pub use view::{Cell, DocumentView, SectionBody, MEETING_HEADERS};
