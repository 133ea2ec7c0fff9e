// File: crates/chart-core/src/types.rs
// Summary: Shared types and default layout constants (sizes, margin, step, paddings).

/// RGBA8 color. Opaque to the layout code; only handed to the canvas.
pub type Color = image::Rgba<u8>;

/// Default canvas width in pixels.
pub const WIDTH: u32 = 500;
/// Default canvas height in pixels.
pub const HEIGHT: u32 = 500;

/// Pixel inset reserved for the axes and their labels.
pub const MARGIN: i32 = 30;
/// Pixel distance between consecutive pegs, and the data step each one represents.
pub const SCALING_FACTOR: i32 = 30;

/// Gap between a tick label and its axis.
pub const LABEL_PADDING: i32 = 5;
/// Baseline offset of the title from the top edge.
pub const TITLE_PADDING: i32 = 10;

/// Maximum JPEG quality.
pub const JPEG_QUALITY: u8 = 100;

/// Build an opaque color from RGB components.
pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
    image::Rgba([r, g, b, 255])
}
