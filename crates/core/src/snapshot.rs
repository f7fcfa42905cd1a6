use crate::pieces::{ActivePiece, Shape};
use crate::types::{Cell, ColorId, GameStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ActiveSnapshot {
    pub shape: Shape,
    pub color: ColorId,
    pub row: i32,
    pub col: i32,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            shape: value.shape,
            color: value.color,
            row: value.row,
            col: value.col,
        }
    }
}

impl ActiveSnapshot {
    /// Absolute `(row, col)` of every filled cell, including cells above the top
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .cells()
            .into_iter()
            .map(move |(dr, dc)| (self.row + dr, self.col + dc))
    }
}

/// Read-only view of the engine after a tick or command
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameSnapshot {
    pub rows: u16,
    pub columns: u16,
    /// Locked cells, row-major
    pub board: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    pub status: GameStatus,
    pub paused: bool,
    pub game_over: bool,
    pub episode_id: u32,
    pub seed: u64,
    pub piece_id: u32,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub tick_interval_ms: u32,
}

impl GameSnapshot {
    /// Locked cell at `(row, col)`; `None` when empty or out of range
    pub fn cell(&self, row: u16, col: u16) -> Cell {
        if row >= self.rows || col >= self.columns {
            return None;
        }
        self.board[row as usize * self.columns as usize + col as usize]
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            rows: 0,
            columns: 0,
            board: Vec::new(),
            active: None,
            status: GameStatus::Playing,
            paused: false,
            game_over: false,
            episode_id: 0,
            seed: 0,
            piece_id: 0,
            score: 0,
            level: 0,
            lines: 0,
            tick_interval_ms: 0,
        }
    }
}
