//! TUI Cube (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_cube::{core,term,types}` so the
//! binary, integration tests and benches share one import path.

pub use tui_cube_core as core;
pub use tui_cube_term as term;
pub use tui_cube_types as types;
