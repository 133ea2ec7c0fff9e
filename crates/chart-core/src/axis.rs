// File: crates/chart-core/src/axis.rs
// Summary: Axis layout: far-end cutoff, axis line pixels, and peg (tick) positions.
//
// Everything here is a pure function of the canvas bounds; callers feed the
// returned pixels into a canvas.

use std::iter;

use crate::geometry::{PixelPoint, Rect};

/// Pixel offsets of the four peg pixels relative to the axis line.
const PEG_OFFSETS: [i32; 4] = [-2, -1, 1, 2];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisLayout {
    pub margin: i32,
    pub scaling_factor: i32,
}

impl AxisLayout {
    /// Panics if `scaling_factor` is not positive; `RenderOptions::validate`
    /// rejects such configurations before rendering.
    pub fn new(margin: i32, scaling_factor: i32) -> Self {
        assert!(scaling_factor > 0, "scaling factor must be positive");
        Self { margin, scaling_factor }
    }

    /// Leftover offset at the far end of an axis of `side_length` pixels, such
    /// that `side_length - margin - cutoff` is a whole number of peg steps.
    ///
    /// This is what is left of `side_length - margin` after stripping whole
    /// steps off it. Always in `[0, scaling_factor)`; for sides shorter than
    /// the margin the remainder is taken in the Euclidean sense.
    pub fn cutoff(&self, side_length: i32) -> i32 {
        let remaining = i64::from(side_length) - i64::from(self.margin);
        remaining.rem_euclid(i64::from(self.scaling_factor)) as i32
    }

    /// Row of the horizontal axis line.
    #[inline]
    pub fn axis_y(&self, bounds: Rect) -> i32 {
        bounds.max_y.saturating_sub(self.margin)
    }

    /// Vertical axis, walked from the origin upward to the cutoff (inclusive).
    pub fn vertical_axis(&self, bounds: Rect) -> impl Iterator<Item = PixelPoint> {
        let x = self.margin;
        let top = self.cutoff(bounds.max_y);
        (top..=self.axis_y(bounds)).rev().map(move |y| PixelPoint::new(x, y))
    }

    /// Horizontal axis, walked from the origin rightward to the cutoff (inclusive).
    pub fn horizontal_axis(&self, bounds: Rect) -> impl Iterator<Item = PixelPoint> {
        let y = self.axis_y(bounds);
        let right = bounds.max_x.saturating_sub(self.cutoff(bounds.max_x));
        (self.margin..=right).map(move |x| PixelPoint::new(x, y))
    }

    /// Rows of the vertical pegs, nearest to the origin first. Stops before row 0.
    ///
    /// The walk also ends where the next row would leave the `i32` range, which
    /// is already past row 0.
    pub fn vertical_pegs(&self, bounds: Rect) -> impl Iterator<Item = i32> {
        let step = self.scaling_factor;
        let first = self.axis_y(bounds).checked_sub(step);
        iter::successors(first, move |y| y.checked_sub(step)).take_while(|&y| y > 0)
    }

    /// Columns of the horizontal pegs, nearest to the origin first. Stops before `max_x`.
    pub fn horizontal_pegs(&self, bounds: Rect) -> impl Iterator<Item = i32> {
        let step = self.scaling_factor;
        let max_x = bounds.max_x;
        let first = bounds.min_x.checked_add(self.margin).and_then(|x| x.checked_add(step));
        iter::successors(first, move |x| x.checked_add(step)).take_while(move |&x| x < max_x)
    }

    /// Pixels of every vertical peg: a short horizontal stroke across the axis.
    pub fn vertical_peg_pixels(&self, bounds: Rect) -> impl Iterator<Item = PixelPoint> {
        let x = self.margin;
        self.vertical_pegs(bounds)
            .flat_map(move |y| PEG_OFFSETS.into_iter().map(move |d| PixelPoint::new(x.saturating_add(d), y)))
    }

    /// Pixels of every horizontal peg: a short vertical stroke across the axis.
    pub fn horizontal_peg_pixels(&self, bounds: Rect) -> impl Iterator<Item = PixelPoint> {
        let y = self.axis_y(bounds);
        self.horizontal_pegs(bounds)
            .flat_map(move |x| PEG_OFFSETS.into_iter().map(move |d| PixelPoint::new(x, y.saturating_add(d))))
    }
}
