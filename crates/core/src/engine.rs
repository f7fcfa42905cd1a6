//! Game engine module - owns the complete game state
//!
//! This module ties together the board, the active piece, the shape catalog and
//! the scoring rules. It runs gravity ticks, applies commands, tracks level and
//! speed, and detects game over.
//!
//! The engine never looks at a clock. The driving loop calls [`GameEngine::tick`]
//! whenever the gravity interval elapses (see [`crate::TickScheduler`]) and
//! [`GameEngine::apply`] for every command in between.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::catalog::ShapeCatalog;
use crate::config::EngineConfig;
use crate::error::ConfigError;
use crate::pieces::ActivePiece;
use crate::scoring::{level_for_score, line_clear_points, tick_interval_ms};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Command, GameStatus};

/// What happened when a piece locked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    /// Points awarded for the clear (0 when nothing cleared)
    pub points: u32,
    /// Level after scoring
    pub level: u32,
    pub level_up: bool,
    /// The replacement piece did not fit
    pub game_over: bool,
}

/// Result of one gravity step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing (paused or game over); nothing changed
    Idle,
    /// The active piece moved down one row
    Fell,
    /// The active piece could not fall and was locked
    Locked(LockEvent),
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: EngineConfig,
    catalog: ShapeCatalog,
    rng: StdRng,
    /// Seed this episode was started with.
    seed: u64,
    board: Board,
    active: Option<ActivePiece>,
    status: GameStatus,
    score: u32,
    level: u32,
    lines: u32,
    tick_interval_ms: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Monotonic id for spawned pieces.
    piece_id: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameEngine {
    /// Create a game with the default board, rules and catalog
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_polytris_core::GameEngine;
    /// use tui_polytris_core::types::Command;
    ///
    /// let mut game = GameEngine::new(12345);
    /// assert!(game.active().is_some());
    /// assert_eq!(game.level(), 1);
    ///
    /// game.apply(Command::MoveLeft);
    /// game.apply(Command::Rotate);
    /// game.tick();
    /// assert_eq!(game.score(), 0);
    /// ```
    pub fn new(seed: u64) -> Self {
        Self::build(EngineConfig::default(), ShapeCatalog::standard(), seed)
    }

    /// Create a game with custom rules and the standard catalog
    pub fn with_config(config: EngineConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_catalog(config, ShapeCatalog::standard(), seed)
    }

    /// Create a game with custom rules and a custom catalog
    pub fn with_catalog(
        config: EngineConfig,
        catalog: ShapeCatalog,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        config.validate(&catalog)?;
        Ok(Self::build(config, catalog, seed))
    }

    fn build(config: EngineConfig, catalog: ShapeCatalog, seed: u64) -> Self {
        let level = level_for_score(0, config.points_per_level);
        let mut engine = Self {
            board: Board::with_size(config.rows, config.columns),
            tick_interval_ms: tick_interval_ms(level, config.base_tick_ms, config.min_tick_ms),
            config,
            catalog,
            rng: StdRng::seed_from_u64(seed),
            seed,
            active: None,
            status: GameStatus::Playing,
            score: 0,
            level,
            lines: 0,
            episode_id: 0,
            piece_id: 0,
            last_event: None,
        };
        engine.spawn_piece();
        engine
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn catalog(&self) -> &ShapeCatalog {
        &self.catalog
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn paused(&self) -> bool {
        self.status == GameStatus::Paused
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// Whether gravity should be running
    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Playing
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn tick_interval_ms(&self) -> u32 {
        self.tick_interval_ms
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    /// Replace the board with a preset one of the same size
    ///
    /// The active piece is re-checked against the new board; if it no longer
    /// fits the game is over.
    pub fn load_board(&mut self, board: Board) -> Result<(), ConfigError> {
        if board.rows() != self.config.rows || board.columns() != self.config.columns {
            return Err(ConfigError::BoardMismatch {
                rows: self.config.rows,
                columns: self.config.columns,
                got_rows: board.rows(),
                got_columns: board.columns(),
            });
        }
        self.board = board;
        if let Some(piece) = self.active {
            if !piece.is_valid(&self.board) {
                self.end_game();
            }
        }
        Ok(())
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.board.rows();
        out.columns = self.board.columns();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());
        out.active = self.active.map(ActiveSnapshot::from);
        out.status = self.status;
        out.paused = self.paused();
        out.game_over = self.game_over();
        out.episode_id = self.episode_id;
        out.seed = self.seed;
        out.piece_id = self.piece_id;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.tick_interval_ms = self.tick_interval_ms;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Draw a new piece and put it at the spawn position
    ///
    /// Returns false (and ends the game) if it does not fit there.
    fn spawn_piece(&mut self) -> bool {
        let shape = self.catalog.random_shape(&mut self.rng);
        let color = self.catalog.random_color(&mut self.rng);
        let piece = ActivePiece::spawn(shape, color, self.config.columns);

        self.active = Some(piece);
        self.piece_id = self.piece_id.wrapping_add(1);

        if !piece.is_valid(&self.board) {
            self.end_game();
            return false;
        }
        debug!(
            "spawned piece {} ({}x{}) at ({}, {})",
            self.piece_id,
            shape.height(),
            shape.width(),
            piece.row,
            piece.col
        );
        true
    }

    fn end_game(&mut self) {
        self.status = GameStatus::GameOver;
        info!(
            "game over: score {}, level {}, lines {}",
            self.score, self.level, self.lines
        );
    }

    /// Try to move the active piece
    fn try_move(&mut self, drow: i32, dcol: i32) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let moved = active.shifted(drow, dcol);
        if moved.is_valid(&self.board) {
            self.active = Some(moved);
            return true;
        }
        false
    }

    /// Try to rotate the active piece clockwise in place (no kicks)
    fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let rotated = active.with_shape(active.rotated_clockwise());
        if rotated.is_valid(&self.board) {
            self.active = Some(rotated);
            return true;
        }
        false
    }

    /// Merge a piece that can no longer fall, clear lines and spawn the next one
    fn lock(&mut self, piece: ActivePiece) -> LockEvent {
        self.board
            .merge(&piece.shape, piece.row, piece.col, piece.color);

        let lines_cleared = self.board.clear_full_lines();
        let points = line_clear_points(lines_cleared, self.level, self.config.points_per_line);
        let previous_level = self.level;

        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(lines_cleared);
        self.level = level_for_score(self.score, self.config.points_per_level);
        self.tick_interval_ms = tick_interval_ms(
            self.level,
            self.config.base_tick_ms,
            self.config.min_tick_ms,
        );

        debug!(
            "locked piece {} at ({}, {}): {} lines, +{} points",
            self.piece_id, piece.row, piece.col, lines_cleared, points
        );
        let level_up = self.level > previous_level;
        if level_up {
            info!(
                "level {} reached, tick interval {}ms",
                self.level, self.tick_interval_ms
            );
        }

        let spawned = self.spawn_piece();
        let event = LockEvent {
            lines_cleared,
            points,
            level: self.level,
            level_up,
            game_over: !spawned,
        };
        self.last_event = Some(event);
        event
    }

    /// One gravity step
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Idle;
        }
        let Some(active) = self.active else {
            return TickOutcome::Idle;
        };

        let fallen = active.shifted(1, 0);
        if fallen.is_valid(&self.board) {
            self.active = Some(fallen);
            return TickOutcome::Fell;
        }

        self.active = None;
        TickOutcome::Locked(self.lock(active))
    }

    /// Switch between playing and paused; no effect once the game is over
    pub fn toggle_pause(&mut self) -> bool {
        self.status = match self.status {
            GameStatus::Playing => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Playing,
            GameStatus::GameOver => return false,
        };
        debug!("status -> {}", self.status.as_str());
        true
    }

    /// Throw the current game away and start a fresh one
    ///
    /// The new episode is seeded from the running generator, so a whole
    /// session stays reproducible from the first seed.
    pub fn restart(&mut self) {
        let seed = self.rng.gen::<u64>();
        let episode_id = self.episode_id.wrapping_add(1);

        let mut fresh = Self::build(self.config, self.catalog.clone(), seed);
        fresh.episode_id = episode_id;
        *self = fresh;

        info!("restarted: episode {}, seed {}", episode_id, seed);
    }

    /// Apply a command
    ///
    /// Returns whether anything changed. Movement and rotation only act while
    /// playing; a move that does not fit is a no-op, not an error.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Restart => {
                self.restart();
                true
            }
            Command::TogglePause => self.toggle_pause(),
            _ if !self.is_running() => false,
            Command::MoveLeft => self.try_move(0, -1),
            Command::MoveRight => self.try_move(0, 1),
            Command::SoftDrop => self.try_move(1, 0),
            Command::Rotate => self.try_rotate(),
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(1)
    }
}
