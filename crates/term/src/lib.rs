//! Terminal output for the cube renderer.
//!
//! Geometry from `core` is painted straight into the terminal with cursor
//! positioning sequences. There is no framebuffer: each frame clears the
//! screen and repaints everything, and the whole frame is written with a
//! single flush.

pub mod canvas;
pub mod commands;
pub mod frame_loop;
pub mod interrupt;

pub use tui_cube_core as core;
pub use tui_cube_types as types;

pub use canvas::{Canvas, Viewport};
pub use frame_loop::{AnimationState, FrameLoop, LoopState, RunSummary};
pub use interrupt::InterruptFlag;
