// File: crates/chart-core/src/labels.rs
// Summary: Anchor arithmetic for tick labels and the chart title.

use crate::axis::AxisLayout;
use crate::geometry::{PixelPoint, Rect};

/// Computes baseline anchors for text, given the measured width of each string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabelPlacer {
    pub margin: i32,
    pub scaling_factor: i32,
    pub padding: i32,
    pub title_padding: i32,
}

/// A tick label and where to draw it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedLabel {
    pub text: String,
    pub anchor: PixelPoint,
}

impl LabelPlacer {
    pub fn new(margin: i32, scaling_factor: i32, padding: i32, title_padding: i32) -> Self {
        Self { margin, scaling_factor, padding, title_padding }
    }

    /// Right-aligned just left of the vertical axis, nudged down toward the peg.
    pub fn vertical_anchor(&self, peg_y: i32, text_width: i32) -> PixelPoint {
        PixelPoint::new(
            self.margin.saturating_sub(text_width).saturating_sub(self.padding),
            peg_y.saturating_add(self.padding),
        )
    }

    /// Below the horizontal axis, starting slightly left of the peg.
    pub fn horizontal_anchor(&self, peg_x: i32, bounds: Rect) -> PixelPoint {
        let below = bounds.max_y.saturating_sub(self.margin);
        PixelPoint::new(
            peg_x.saturating_sub(self.padding),
            below.saturating_add(self.padding.saturating_mul(3)),
        )
    }

    /// Horizontally centered on the canvas, near the top edge.
    pub fn title_anchor(&self, bounds: Rect, text_width: i32) -> PixelPoint {
        PixelPoint::new(
            (bounds.max_x / 2).saturating_sub(text_width / 2),
            bounds.min_y.saturating_add(self.title_padding),
        )
    }

    /// Label values `sf, 2sf, 3sf, ...` paired with the given peg offsets in order.
    pub fn label_values<I>(&self, pegs: I) -> impl Iterator<Item = (i32, String)>
    where
        I: IntoIterator<Item = i32>,
    {
        let step = self.scaling_factor;
        pegs.into_iter()
            .zip(1..)
            .map(move |(offset, k): (i32, i32)| (offset, k.saturating_mul(step).to_string()))
    }

    pub fn vertical_labels<F>(&self, axes: &AxisLayout, bounds: Rect, measure: F) -> Vec<PlacedLabel>
    where
        F: Fn(&str) -> i32,
    {
        self.label_values(axes.vertical_pegs(bounds))
            .map(|(y, text)| {
                let anchor = self.vertical_anchor(y, measure(&text));
                PlacedLabel { text, anchor }
            })
            .collect()
    }

    pub fn horizontal_labels(&self, axes: &AxisLayout, bounds: Rect) -> Vec<PlacedLabel> {
        self.label_values(axes.horizontal_pegs(bounds))
            .map(|(x, text)| PlacedLabel { anchor: self.horizontal_anchor(x, bounds), text })
            .collect()
    }
}
