//! Core geometry pipeline - pure, deterministic, and testable
//!
//! This crate contains the cube model and everything needed to turn it into a
//! stream of 2D sample points. It has **zero dependencies** on terminals or I/O:
//! points are handed to a [`PointSink`](raster::PointSink), which the terminal
//! crate implements and tests implement with a plain `Vec`.
//!
//! # Module Structure
//!
//! - [`cube`]: the 8-vertex cube and its fixed edge order
//! - [`transform`]: incremental rotation about the X, Y and Z axes
//! - [`project`]: orthographic projection (z is dropped)
//! - [`raster`]: line walking in logical space
//!
//! # Example
//!
//! ```
//! use tui_cube_core::{draw_cube, tumble, Cube};
//! use tui_cube_types::{Point2, ROTATION_STEP};
//!
//! let mut cube = Cube::default();
//! tumble(&mut cube, ROTATION_STEP);
//!
//! let mut points: Vec<Point2> = Vec::new();
//! draw_cube(&cube, &mut points).unwrap();
//! assert!(!points.is_empty());
//! ```

pub mod cube;
pub mod project;
pub mod raster;
pub mod transform;

pub use cube::{Cube, EDGES, VERTEX_COUNT};
pub use project::project;
pub use raster::{draw_axes, draw_cube, draw_line, PointSink};
pub use transform::{rotate_x, rotate_y, rotate_z, tumble};
