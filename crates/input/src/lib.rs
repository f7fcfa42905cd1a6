//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`]. Quitting and
//! leaving the title screen are front-end concerns and are reported separately.

pub mod map;

pub use tui_polytris_types as types;

pub use map::{handle_key_event, is_start_key, should_quit};
