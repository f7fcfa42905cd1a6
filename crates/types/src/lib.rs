//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no engine behavior, making them usable in any
//! context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The default playfield is derived from a 300x600 pixel canvas with 30 pixel
//! cells:
//!
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Rows**: 20 (indexed 0-19, top to bottom)
//! - **Spawn position**: row 0, horizontally centered on the piece's bounding box
//!
//! # Timing and Progression
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_TICK_MS` | 1000 | Gravity interval at level 1 |
//! | `MIN_TICK_MS` | 100 | Gravity interval floor |
//! | `POINTS_PER_LINE` | 100 | Points per cleared line, times level |
//! | `POINTS_PER_LEVEL` | 1000 | Score needed per level |
//!
//! The gravity interval is `max(MIN_TICK_MS, BASE_TICK_MS / level)` and the
//! level is `score / POINTS_PER_LEVEL + 1`.
//!
//! # Examples
//!
//! ```
//! use tui_polytris_types::{ColorId, Command, BOARD_COLUMNS, BOARD_ROWS};
//!
//! let cmd: Command = "rotate".parse().unwrap();
//! assert_eq!(cmd, Command::Rotate);
//! assert!("hardDrop".parse::<Command>().is_err());
//!
//! assert_eq!(ColorId(3).index(), 3);
//! assert_eq!(BOARD_COLUMNS, 10);
//! assert_eq!(BOARD_ROWS, 20);
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Canvas width in pixels the default board is derived from
pub const CANVAS_WIDTH_PX: u32 = 300;

/// Canvas height in pixels the default board is derived from
pub const CANVAS_HEIGHT_PX: u32 = 600;

/// Side length of one board cell in pixels
pub const CELL_PX: u32 = 30;

/// Board width in cells (10 columns)
pub const BOARD_COLUMNS: u16 = (CANVAS_WIDTH_PX / CELL_PX) as u16;

/// Board height in cells (20 rows)
pub const BOARD_ROWS: u16 = (CANVAS_HEIGHT_PX / CELL_PX) as u16;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_TICK_MS: u32 = 1000;

/// Gravity interval floor (100ms)
pub const MIN_TICK_MS: u32 = 100;

/// Points awarded per cleared line, multiplied by the current level
pub const POINTS_PER_LINE: u32 = 100;

/// Score needed to advance one level
pub const POINTS_PER_LEVEL: u32 = 1000;

/// Number of colors in the palette
pub const PALETTE_SIZE: u8 = 15;

/// Number of shapes in the standard catalog
pub const SHAPE_COUNT: usize = 15;

/// Largest bounding box side of any shape
pub const MAX_SHAPE_DIM: usize = 5;

/// Opaque color identifier, an index into the palette
///
/// The engine never interprets colors; it only stores them in the board and
/// passes them through to the snapshot. The presentation layer maps the index
/// to an actual color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorId(pub u8);

impl ColorId {
    pub fn index(self) -> u8 {
        self.0
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(ColorId)`: Cell filled with the color of the piece that locked there
pub type Cell = Option<ColorId>;

/// Commands accepted by the engine
///
/// This is the closed set the presentation layer may send. Each one is a
/// zero-argument signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (never locks)
    SoftDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Switch between playing and paused
    TogglePause,
    /// Discard the current game and start a new one
    Restart,
}

impl Command {
    pub const ALL: [Command; 6] = [
        Command::MoveLeft,
        Command::MoveRight,
        Command::SoftDrop,
        Command::Rotate,
        Command::TogglePause,
        Command::Restart,
    ];

    /// Convert to camelCase string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_polytris_types::Command;
    ///
    /// assert_eq!(Command::MoveLeft.as_str(), "moveLeft");
    /// assert_eq!(Command::TogglePause.as_str(), "togglePause");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::Rotate => "rotate",
            Command::TogglePause => "togglePause",
            Command::Restart => "restart",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejected command name at the input boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown command: {0:?}")]
pub struct ParseCommandError(pub String);

impl FromStr for Command {
    type Err = ParseCommandError;

    /// Parse a command name (case-insensitive)
    ///
    /// `pause` is accepted as an alias of `togglePause`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "moveleft" => Ok(Command::MoveLeft),
            "moveright" => Ok(Command::MoveRight),
            "softdrop" => Ok(Command::SoftDrop),
            "rotate" => Ok(Command::Rotate),
            "togglepause" | "pause" => Ok(Command::TogglePause),
            "restart" => Ok(Command::Restart),
            _ => Err(ParseCommandError(s.to_string())),
        }
    }
}

/// Engine lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum GameStatus {
    #[default]
    Playing,
    Paused,
    GameOver,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::Paused => "paused",
            GameStatus::GameOver => "gameOver",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_board_matches_canvas() {
        assert_eq!(BOARD_COLUMNS, 10);
        assert_eq!(BOARD_ROWS, 20);
        assert_eq!(BASE_TICK_MS, 1000);
        assert_eq!(MIN_TICK_MS, 100);
        assert_eq!(POINTS_PER_LINE, 100);
        assert_eq!(POINTS_PER_LEVEL, 1000);
    }

    #[test]
    fn command_names_round_trip() {
        for cmd in Command::ALL {
            assert_eq!(cmd.as_str().parse::<Command>(), Ok(cmd));
        }
    }

    #[test]
    fn command_parse_is_case_insensitive() {
        assert_eq!("MOVELEFT".parse::<Command>(), Ok(Command::MoveLeft));
        assert_eq!("Pause".parse::<Command>(), Ok(Command::TogglePause));
    }

    #[test]
    fn unknown_command_is_rejected() {
        let err = "hold".parse::<Command>().unwrap_err();
        assert_eq!(err, ParseCommandError("hold".to_string()));
        assert_eq!(err.to_string(), "unknown command: \"hold\"");
    }
}
