//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of a falling-block game played with
//! polyominoes of up to 5x5 cells. It has no dependencies on terminals or
//! clocks, which makes it:
//!
//! - **Deterministic**: the same seed produces the same sequence of pieces
//! - **Testable**: every rule is exercised by unit tests
//! - **Portable**: any front end can drive it with ticks and commands
//!
//! # Module Structure
//!
//! - [`board`]: rectangular grid with placement checks, merging and line clearing
//! - [`catalog`]: the fixed set of spawnable shapes and the palette size
//! - [`config`]: board size and scoring/speed rules
//! - [`engine`]: complete game state and the Playing/Paused/GameOver machine
//! - [`pieces`]: shape masks, clockwise rotation and the active piece
//! - [`scheduler`]: millisecond gravity timer
//! - [`scoring`]: linear scoring, level and gravity interval
//! - [`snapshot`]: read-only view handed to presentation layers
//!
//! # Game Rules
//!
//! - Pieces are drawn uniformly from the catalog, each with a random color
//! - Rotation is clockwise only and has no wall kicks
//! - A piece locks when a gravity tick cannot move it down; soft drop never locks
//! - Each cleared line is worth `100 * level`; the level goes up every 1000 points
//! - Gravity starts at 1000ms and shortens to `1000 / level`, never below 100ms
//!
//! # Example
//!
//! ```
//! use tui_polytris_core::{GameEngine, TickOutcome};
//! use tui_polytris_core::types::Command;
//!
//! let mut game = GameEngine::new(12345);
//!
//! game.apply(Command::MoveRight);
//! game.apply(Command::Rotate);
//!
//! // Keep ticking until the piece lands.
//! while game.tick() == TickOutcome::Fell {}
//!
//! assert_eq!(game.piece_id(), 2);
//! ```

pub mod board;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod pieces;
pub mod scheduler;
pub mod scoring;
pub mod snapshot;

pub use tui_polytris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use catalog::{ShapeCatalog, STANDARD_MASKS};
pub use config::EngineConfig;
pub use engine::{GameEngine, LockEvent, TickOutcome};
pub use error::{BoardError, ConfigError, ShapeError};
pub use pieces::{ActivePiece, Shape};
pub use scheduler::TickScheduler;
pub use scoring::{level_for_score, line_clear_points, tick_interval_ms};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
