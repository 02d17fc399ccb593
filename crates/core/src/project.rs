//! Orthographic projection.

use tui_cube_types::{Point2, Point3};

/// Flatten a point by dropping z. No perspective divide.
#[inline]
pub fn project(p: Point3) -> Point2 {
    Point2 { x: p.x, y: p.y }
}
