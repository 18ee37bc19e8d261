//! Dialog components for TUI

mod accepted_dialog;
mod base;

pub use accepted_dialog::render_accepted_dialog;
