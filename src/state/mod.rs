//! Application state module

mod app_state;
mod busy;
pub mod document;
mod forms;
pub mod registry;
mod validation;
mod wizard;

pub use app_state::*;
pub use busy::*;
pub use document::{Competencies, GeneratedDocument};
pub use forms::*;
pub use registry::*;
pub use validation::*;
pub use wizard::*;
