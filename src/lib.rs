//! TUI Polytris (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so the binary, the
//! integration tests and the benchmarks can use `tui_polytris::{core,input,term,types}`.

pub use tui_polytris_core as core;
pub use tui_polytris_input as input;
pub use tui_polytris_term as term;
pub use tui_polytris_types as types;
