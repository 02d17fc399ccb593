//! The cube model: 8 vertices in a fixed topological order.

use tui_cube_types::{Point3, CUBE_SIZE};

pub const VERTEX_COUNT: usize = 8;

/// Edge list as vertex index pairs.
///
/// For each side `i` in `0..4`: top-face edge, bottom-face edge, vertical edge.
/// Depends on the vertex order documented on [`Cube`].
pub const EDGES: [(usize, usize); 12] = [
    (0, 1),
    (4, 5),
    (0, 4),
    (1, 2),
    (5, 6),
    (1, 5),
    (2, 3),
    (6, 7),
    (2, 6),
    (3, 0),
    (7, 4),
    (3, 7),
];

/// A cube centred on the origin.
///
/// Indices 0-3 are the top face (front-left, front-right, back-right,
/// back-left); 4-7 are the bottom face in the same order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cube {
    vertices: [Point3; VERTEX_COUNT],
}

impl Default for Cube {
    fn default() -> Self {
        Self::new(CUBE_SIZE)
    }
}

impl Cube {
    pub fn new(size: f32) -> Self {
        let left = -size / 2.0;
        let top = -size / 2.0;
        let front = -size / 2.0;
        let right = left + size;
        let bottom = top + size;
        let back = front + size;

        Self {
            vertices: [
                Point3::new(left, top, front),
                Point3::new(right, top, front),
                Point3::new(right, top, back),
                Point3::new(left, top, back),
                Point3::new(left, bottom, front),
                Point3::new(right, bottom, front),
                Point3::new(right, bottom, back),
                Point3::new(left, bottom, back),
            ],
        }
    }

    pub fn vertices(&self) -> &[Point3; VERTEX_COUNT] {
        &self.vertices
    }

    pub(crate) fn vertices_mut(&mut self) -> &mut [Point3; VERTEX_COUNT] {
        &mut self.vertices
    }

    pub fn vertex(&self, i: usize) -> Point3 {
        self.vertices[i]
    }

    /// The 12 edges as point pairs, in [`EDGES`] order.
    pub fn segments(&self) -> impl Iterator<Item = (Point3, Point3)> + '_ {
        EDGES
            .iter()
            .map(move |&(a, b)| (self.vertices[a], self.vertices[b]))
    }

    /// Mean of the vertices.
    pub fn centroid(&self) -> Point3 {
        let mut c = Point3::default();
        for v in &self.vertices {
            c.x += v.x;
            c.y += v.y;
            c.z += v.z;
        }
        let n = VERTEX_COUNT as f32;
        Point3::new(c.x / n, c.y / n, c.z / n)
    }
}
