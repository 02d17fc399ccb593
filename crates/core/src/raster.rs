//! Line walking in logical space.
//!
//! Lines are sampled at unit steps along one axis and every sample is handed to
//! a [`PointSink`]. The walk axis is chosen by comparing the *truncated* x
//! coordinates of the projected endpoints: segments whose endpoints share an
//! integer x are walked along y, even when they are not steep. Rendered output
//! depends on this, so it is kept as-is.

use std::convert::Infallible;

use tui_cube_types::{Bounds, Point2, Point3};

use crate::cube::Cube;
use crate::project::project;

/// Receives sample points produced by the rasterizer.
pub trait PointSink {
    type Error;

    fn plot(&mut self, p: Point2) -> Result<(), Self::Error>;
}

impl PointSink for Vec<Point2> {
    type Error = Infallible;

    fn plot(&mut self, p: Point2) -> Result<(), Self::Error> {
        self.push(p);
        Ok(())
    }
}

/// Draw the segment `a`-`b` into `sink`.
///
/// Emits at least one point. A zero-length segment emits exactly its
/// projected point.
pub fn draw_line<S: PointSink>(a: Point3, b: Point3, sink: &mut S) -> Result<(), S::Error> {
    let pa = project(a);
    let pb = project(b);

    if pa.x as i32 != pb.x as i32 {
        let (start, end) = if pa.x < pb.x { (pa, pb) } else { (pb, pa) };
        let m = (end.y - start.y) / (end.x - start.x);
        let mut i = 0i32;
        while start.x + i as f32 <= end.x {
            let step = i as f32;
            sink.plot(Point2::new(start.x + step, start.y + m * step))?;
            i += 1;
        }
    } else {
        let (start, end) = if pa.y < pb.y { (pa.y, pb.y) } else { (pb.y, pa.y) };
        let mut j = 0i32;
        while start + j as f32 <= end {
            // x always comes from the first endpoint.
            sink.plot(Point2::new(pa.x, start + j as f32))?;
            j += 1;
        }
    }

    Ok(())
}

/// Draw all 12 edges of `cube` in fixed edge order.
pub fn draw_cube<S: PointSink>(cube: &Cube, sink: &mut S) -> Result<(), S::Error> {
    for (a, b) in cube.segments() {
        draw_line(a, b, sink)?;
    }
    Ok(())
}

/// Draw the logical X and Y axes spanning the whole window.
pub fn draw_axes<S: PointSink>(bounds: &Bounds, sink: &mut S) -> Result<(), S::Error> {
    draw_line(
        Point3::new(0.0, bounds.top, 0.0),
        Point3::new(0.0, bounds.bot, 0.0),
        sink,
    )?;
    draw_line(
        Point3::new(bounds.left, 0.0, 10.0),
        Point3::new(bounds.right, 0.0, 10.0),
        sink,
    )
}
