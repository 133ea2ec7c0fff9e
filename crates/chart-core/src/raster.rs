// File: crates/chart-core/src/raster.rs
// Summary: Integer Bresenham line rasterizer, exposed as a lazy pixel iterator.

use crate::canvas::Canvas;
use crate::geometry::PixelPoint;
use crate::types::Color;

/// Pixels of the discrete line from `start` to `end`, both inclusive.
///
/// Yields exactly `max(dx, dy) + 1` pixels, each 8-connected to the previous.
/// The error term is kept in `i64`, so any pair of `i32` endpoints works; the
/// current pixel never leaves the box spanned by the endpoints.
#[derive(Clone, Debug)]
pub struct LinePixels {
    cur: PixelPoint,
    end: PixelPoint,
    dx: i64,
    dy: i64,
    sx: i32,
    sy: i32,
    err: i64,
    done: bool,
}

impl LinePixels {
    pub fn new(start: PixelPoint, end: PixelPoint) -> Self {
        let dx = (i64::from(end.x) - i64::from(start.x)).abs();
        let dy = (i64::from(end.y) - i64::from(start.y)).abs();
        let sx = if start.x < end.x { 1 } else { -1 };
        let sy = if start.y < end.y { 1 } else { -1 };
        Self {
            cur: start,
            end,
            dx,
            dy,
            sx,
            sy,
            err: dx - dy,
            done: false,
        }
    }
}

impl Iterator for LinePixels {
    type Item = PixelPoint;

    fn next(&mut self) -> Option<PixelPoint> {
        if self.done {
            return None;
        }
        let out = self.cur;
        if self.cur == self.end {
            self.done = true;
            return Some(out);
        }
        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.cur.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.cur.y += self.sy;
        }
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let rx = (i64::from(self.end.x) - i64::from(self.cur.x)).abs();
        let ry = (i64::from(self.end.y) - i64::from(self.cur.y)).abs();
        match usize::try_from(rx.max(ry) + 1) {
            Ok(left) => (left, Some(left)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl std::iter::FusedIterator for LinePixels {}

/// Paint the line from `from` to `to` (inclusive) onto `canvas`.
pub fn draw_line<C: Canvas + ?Sized>(canvas: &mut C, color: Color, from: PixelPoint, to: PixelPoint) {
    for p in LinePixels::new(from, to) {
        canvas.set_pixel(p.x, p.y, color);
    }
}

/// Connect consecutive points with straight segments, in input order.
/// Fewer than two points draws nothing.
pub fn draw_polyline<C: Canvas + ?Sized>(canvas: &mut C, color: Color, points: &[PixelPoint]) {
    for pair in points.windows(2) {
        draw_line(canvas, color, pair[0], pair[1]);
    }
}
