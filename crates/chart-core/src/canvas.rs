// File: crates/chart-core/src/canvas.rs
// Summary: Canvas trait and an RGBA pixel buffer that clips out-of-range writes.

use image::RgbaImage;

use crate::geometry::Rect;
use crate::types::Color;

/// Drawing surface consumed by the renderer.
pub trait Canvas {
    fn bounds(&self) -> Rect;

    /// Write one pixel. Coordinates outside `bounds()` are the canvas's concern.
    fn set_pixel(&mut self, x: i32, y: i32, color: Color);

    /// Paint every pixel inside `bounds()`.
    fn fill(&mut self, color: Color) {
        let b = self.bounds();
        for y in b.min_y..b.max_y {
            for x in b.min_x..b.max_x {
                self.set_pixel(x, y, color);
            }
        }
    }
}

/// Fixed-size RGBA buffer. Writes outside the buffer are dropped and counted.
#[derive(Clone, Debug)]
pub struct PixelCanvas {
    image: RgbaImage,
    clipped: usize,
}

impl PixelCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self { image: RgbaImage::new(width, height), clipped: 0 }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Read back a pixel; `None` when out of range.
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        if !self.bounds().contains(x, y) {
            return None;
        }
        Some(*self.image.get_pixel(x as u32, y as u32))
    }

    /// Number of writes that fell outside the buffer so far.
    pub fn clipped_writes(&self) -> usize {
        self.clipped
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

impl Canvas for PixelCanvas {
    fn bounds(&self) -> Rect {
        Rect::from_size(self.image.width() as i32, self.image.height() as i32)
    }

    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if self.bounds().contains(x, y) {
            self.image.put_pixel(x as u32, y as u32, color);
        } else {
            self.clipped += 1;
        }
    }

    fn fill(&mut self, color: Color) {
        for px in self.image.pixels_mut() {
            *px = color;
        }
    }
}
