//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the game is drawn into a plain
//! framebuffer, which is then flushed to the terminal as a diff.
//!
//! - `core` stays free of I/O
//! - Board cells are 2 characters wide so they look square
//! - The view takes a `GameSnapshot`, so it works for any board size

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use tui_polytris_core as core;
pub use tui_polytris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use palette::{color_of, PALETTE};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
