// File: crates/chart-core/src/scale.rs
// Summary: Data-space to pixel-space transform (Y flip plus margin shift).

use crate::geometry::{DataPoint, PixelPoint, Rect};

/// Converts data coordinates to canvas pixels.
///
/// One data unit maps to one pixel. The origin moves inward by `margin` so the
/// axes have room, and Y is flipped because pixel rows grow downward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoordinateMapper {
    pub margin: i32,
}

impl CoordinateMapper {
    pub const fn new(margin: i32) -> Self {
        Self { margin }
    }

    /// No bounds checking: points that land off-canvas are clipped when drawn.
    ///
    /// Results beyond the `i32` range saturate. `PixelCanvas` bounds start at 0
    /// and stop short of `i32::MAX`, so a saturated coordinate stays off-canvas.
    #[inline]
    pub fn map(&self, p: DataPoint, bounds: Rect) -> PixelPoint {
        let margin = i64::from(self.margin);
        let x = i64::from(p.x) + margin;
        let y = i64::from(bounds.max_y) - i64::from(p.y) - margin;
        PixelPoint { x: saturate(x), y: saturate(y) }
    }

    pub fn map_all(&self, points: &[DataPoint], bounds: Rect) -> Vec<PixelPoint> {
        points.iter().map(|&p| self.map(p, bounds)).collect()
    }
}

#[inline]
fn saturate(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
