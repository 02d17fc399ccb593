//! Incremental rotation about the principal axes.
//!
//! Right-handed rotation with `c = cos(angle)` and `s = sin(angle)`. The cube
//! is rotated in place: each call compounds on the previous orientation.

use tui_cube_types::Point3;

use crate::cube::Cube;

/// Precomputed sine and cosine for one angle.
#[derive(Debug, Clone, Copy)]
struct Turn {
    s: f32,
    c: f32,
}

impl Turn {
    fn new(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self { s, c }
    }

    fn x(self, p: Point3) -> Point3 {
        Point3 {
            x: p.x,
            y: self.c * p.y - self.s * p.z,
            z: self.s * p.y + self.c * p.z,
        }
    }

    fn y(self, p: Point3) -> Point3 {
        Point3 {
            x: self.c * p.x + self.s * p.z,
            y: p.y,
            z: -self.s * p.x + self.c * p.z,
        }
    }

    fn z(self, p: Point3) -> Point3 {
        Point3 {
            x: self.c * p.x - self.s * p.y,
            y: self.s * p.x + self.c * p.y,
            z: p.z,
        }
    }
}

pub fn rotated_x(p: Point3, angle: f32) -> Point3 {
    Turn::new(angle).x(p)
}

pub fn rotated_y(p: Point3, angle: f32) -> Point3 {
    Turn::new(angle).y(p)
}

pub fn rotated_z(p: Point3, angle: f32) -> Point3 {
    Turn::new(angle).z(p)
}

pub fn rotate_x(cube: &mut Cube, angle: f32) {
    let t = Turn::new(angle);
    for v in cube.vertices_mut().iter_mut() {
        *v = t.x(*v);
    }
}

pub fn rotate_y(cube: &mut Cube, angle: f32) {
    let t = Turn::new(angle);
    for v in cube.vertices_mut().iter_mut() {
        *v = t.y(*v);
    }
}

pub fn rotate_z(cube: &mut Cube, angle: f32) {
    let t = Turn::new(angle);
    for v in cube.vertices_mut().iter_mut() {
        *v = t.z(*v);
    }
}

/// One animation step: X, then Y, then Z, all by the same angle.
pub fn tumble(cube: &mut Cube, angle: f32) {
    rotate_x(cube, angle);
    rotate_y(cube, angle);
    rotate_z(cube, angle);
}
