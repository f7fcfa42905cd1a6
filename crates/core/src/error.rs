//! Error types for the core crate.
//!
//! Invalid moves and game over are not errors; they are reported through
//! `bool` results and the snapshot. These types only cover malformed queries
//! and construction-time validation.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("cell ({row}, {col}) is outside the {rows}x{columns} board")]
    OutOfBounds {
        row: i32,
        col: i32,
        rows: u16,
        columns: u16,
    },
    #[error("board row {row} has {len} cells, expected {expected}")]
    RaggedRows { row: usize, len: usize, expected: usize },
    #[error("board of {rows}x{columns} cells exceeds {max}x{max}")]
    TooLarge {
        rows: usize,
        columns: usize,
        max: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("shape mask has no rows or no columns")]
    Empty,
    #[error("shape row {row} has {len} cells, expected {expected}")]
    Ragged { row: usize, len: usize, expected: usize },
    #[error("shape is {rows}x{cols}, larger than {max}x{max}")]
    TooLarge { rows: usize, cols: usize, max: usize },
    #[error("shape mask has no filled cells")]
    NoCells,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board must have at least one row and one column (got {rows}x{columns})")]
    EmptyBoard { rows: u16, columns: u16 },
    #[error("minimum tick interval must be positive")]
    ZeroMinTick,
    #[error("base tick interval {base_ms}ms is below the {min_ms}ms floor")]
    BaseBelowFloor { base_ms: u32, min_ms: u32 },
    #[error("points per level must be positive")]
    ZeroLevelThreshold,
    #[error("shape catalog is empty")]
    EmptyCatalog,
    #[error("palette is empty")]
    EmptyPalette,
    #[error("shape {index} is {width} cells wide, board has {columns} columns")]
    ShapeTooWide {
        index: usize,
        width: u16,
        columns: u16,
    },
    #[error("preset board is {got_rows}x{got_columns}, engine expects {rows}x{columns}")]
    BoardMismatch {
        rows: u16,
        columns: u16,
        got_rows: u16,
        got_columns: u16,
    },
    #[error("invalid shape: {0}")]
    Shape(#[from] ShapeError),
}
