//! Application state module

mod app_state;
mod indicators;
mod forms;

pub use app_state::*;
pub use indicators::*;
pub use forms::*;
