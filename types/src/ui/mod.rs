//! UI state types shared by the engine and the TUI.
//!
//! Pure data types with no IO, no async, no ratatui dependency.
//! Used by both the engine (state ownership) and tui (rendering/input).

mod input;
mod view_state;

pub use input::InputMode;
pub use view_state::{UiOptions, View};
