//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the renderer.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (geometry, rasterization, terminal output, tests).
//!
//! # Fixed Configuration
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TERM_COLS` | 150 | Grid width in terminal cells |
//! | `TERM_ROWS` | 80 | Grid height in terminal cells |
//! | `FPS` | 30 | Target frame rate |
//! | `LEFT` / `RIGHT` | -100 / 100 | Horizontal logical window |
//! | `TOP` / `BOT` | -100 / 100 | Vertical logical window |
//! | `CUBE_SIZE` | 50 | Cube side length in logical units |
//! | `ROTATION_STEP` | π/100 | Per-frame rotation about each axis (radians) |
//!
//! Logical coordinates are independent of the real terminal size. The canvas
//! maps the logical window onto the fixed `TERM_COLS x TERM_ROWS` grid.
//!
//! # Examples
//!
//! ```
//! use tui_cube_types::{Config, Point3, TERM_COLS, TERM_ROWS};
//!
//! let config = Config::default();
//! assert_eq!(config.cols, TERM_COLS);
//! assert_eq!(config.rows, TERM_ROWS);
//!
//! let p = Point3::new(1.0, 2.0, 3.0);
//! assert_eq!(p.z, 3.0);
//! ```

use std::time::Duration;

/// Grid width in cells (150 columns)
pub const TERM_COLS: u16 = 150;

/// Grid height in cells (80 rows)
pub const TERM_ROWS: u16 = 80;

/// Target frame rate (frames per second)
pub const FPS: f32 = 30.0;

/// Left edge of the logical window
pub const LEFT: f32 = -100.0;

/// Right edge of the logical window
pub const RIGHT: f32 = 100.0;

/// Top edge of the logical window
pub const TOP: f32 = -100.0;

/// Bottom edge of the logical window
pub const BOT: f32 = 100.0;

/// Cube side length in logical units
pub const CUBE_SIZE: f32 = 50.0;

/// Rotation applied about each axis every frame (π/100 radians)
pub const ROTATION_STEP: f32 = std::f32::consts::PI / 100.0;

/// Double-line vertical border
pub const VERTICAL_BORDER: &str = "║";

/// Double-line horizontal border
pub const HORIZONTAL_BORDER: &str = "═";

pub const TOP_LEFT_BORDER: &str = "╔";
pub const TOP_RIGHT_BORDER: &str = "╗";
pub const BOT_LEFT_BORDER: &str = "╚";
pub const BOT_RIGHT_BORDER: &str = "╝";

/// Full block used for edge pixels
pub const PIXEL_SQUARE: &str = "█";

/// Alternate pixel glyph. Renders double-width on most terminals.
pub const PIXEL_CIRCLE: &str = "⚪";

/// A point in 3D logical space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: Point3) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// A point in 2D logical space, produced by projection.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Logical window mapped onto the terminal grid.
///
/// `left`/`top` are the smaller coordinates; the window is symmetric about the
/// origin in the default configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bot: f32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            left: LEFT,
            right: RIGHT,
            top: TOP,
            bot: BOT,
        }
    }
}

/// Glyph set used by the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub vertical: &'static str,
    pub horizontal: &'static str,
    pub top_left: &'static str,
    pub top_right: &'static str,
    pub bot_left: &'static str,
    pub bot_right: &'static str,
    pub pixel: &'static str,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            vertical: VERTICAL_BORDER,
            horizontal: HORIZONTAL_BORDER,
            top_left: TOP_LEFT_BORDER,
            top_right: TOP_RIGHT_BORDER,
            bot_left: BOT_LEFT_BORDER,
            bot_right: BOT_RIGHT_BORDER,
            pixel: PIXEL_SQUARE,
        }
    }
}

/// Run configuration. Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Grid width in terminal cells.
    pub cols: u16,
    /// Grid height in terminal cells.
    pub rows: u16,
    /// Target frame rate.
    pub fps: f32,
    pub bounds: Bounds,
    /// Cube side length in logical units.
    pub cube_size: f32,
    /// Radians applied about each axis per frame.
    pub rotation_step: f32,
    /// Terminal columns covered by one painted pixel.
    ///
    /// Whether a glyph occupies one or two cells depends on the terminal, so
    /// this is left to the caller. `1` reproduces the reference output.
    pub cell_width: u16,
    pub glyphs: Glyphs,
    /// Draw the logical X and Y axes under the cube.
    pub show_axes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cols: TERM_COLS,
            rows: TERM_ROWS,
            fps: FPS,
            bounds: Bounds::default(),
            cube_size: CUBE_SIZE,
            rotation_step: ROTATION_STEP,
            cell_width: 1,
            glyphs: Glyphs::default(),
            show_axes: false,
        }
    }
}

impl Config {
    /// Pause between frames: the reciprocal of `fps`.
    ///
    /// Time spent rendering is not subtracted, so slow terminals lower the
    /// effective rate. `None` when `1/fps` is not a representable `Duration`
    /// (zero, negative, NaN, or so small a rate that the pause overflows).
    pub fn frame_interval(&self) -> Option<Duration> {
        Duration::try_from_secs_f32(1.0 / self.fps).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_defaults() {
        let c = Config::default();
        assert_eq!(c.cols, 150);
        assert_eq!(c.rows, 80);
        assert_eq!(c.fps, 30.0);
        assert_eq!(c.bounds.left, -100.0);
        assert_eq!(c.bounds.right, 100.0);
        assert_eq!(c.bounds.top, -100.0);
        assert_eq!(c.bounds.bot, 100.0);
        assert_eq!(c.cube_size, 50.0);
        assert_eq!(c.cell_width, 1);
        assert!(!c.show_axes);
        assert!((c.rotation_step - std::f32::consts::PI / 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn frame_interval_is_reciprocal_of_fps() {
        let c = Config::default();
        let ms = c.frame_interval().unwrap().as_secs_f64() * 1000.0;
        assert!((ms - 33.333).abs() < 0.01, "got {ms}");
    }

    #[test]
    fn frame_interval_is_none_when_unrepresentable() {
        for fps in [0.0, -1.0, f32::NAN, 1e-30] {
            let c = Config {
                fps,
                ..Config::default()
            };
            assert_eq!(c.frame_interval(), None, "fps {fps}");
        }
    }

    #[test]
    fn corner_glyphs_are_distinct() {
        let g = Glyphs::default();
        let all = [
            g.vertical,
            g.horizontal,
            g.top_left,
            g.top_right,
            g.bot_left,
            g.bot_right,
            g.pixel,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(3.0, 4.0, 12.0);
        assert_eq!(a.distance(b), 13.0);
    }
}
