// File: crates/chart-core/src/text.rs
// Summary: Text measurement/drawing interface and a fixed-width 7x13 bitmap font renderer.

use std::convert::Infallible;

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Point as EgPoint, Size};
use embedded_graphics::mono_font::ascii::FONT_7X13;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::text::{Baseline, Text};
use embedded_graphics::{Drawable, Pixel};

use crate::canvas::Canvas;
use crate::geometry::PixelPoint;
use crate::types::Color;

/// Measures and draws strings. `anchor` is the pen position on the text baseline.
pub trait TextRenderer {
    fn measure_width(&self, text: &str) -> i32;
    fn draw_string(&self, canvas: &mut dyn Canvas, anchor: PixelPoint, text: &str, color: Color);
}

/// Monospace bitmap font renderer (ASCII, 7x13 cells by default).
#[derive(Clone, Copy)]
pub struct BitmapFont {
    font: &'static MonoFont<'static>,
}

impl BitmapFont {
    pub fn new(font: &'static MonoFont<'static>) -> Self {
        Self { font }
    }

    /// Horizontal pen advance per character.
    pub fn advance(&self) -> i32 {
        (self.font.character_size.width + self.font.character_spacing) as i32
    }
}

impl Default for BitmapFont {
    fn default() -> Self {
        Self::new(&FONT_7X13)
    }
}

impl std::fmt::Debug for BitmapFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitmapFont")
            .field("cell", &(self.font.character_size.width, self.font.character_size.height))
            .finish()
    }
}

impl TextRenderer for BitmapFont {
    fn measure_width(&self, text: &str) -> i32 {
        text.chars().count() as i32 * self.advance()
    }

    fn draw_string(&self, canvas: &mut dyn Canvas, anchor: PixelPoint, text: &str, color: Color) {
        let style = MonoTextStyle::new(self.font, BinaryColor::On);
        let origin = EgPoint::new(anchor.x, anchor.y);
        let mut target = GlyphTarget { canvas, color };
        if let Err(never) = Text::with_baseline(text, origin, style, Baseline::Alphabetic).draw(&mut target) {
            match never {}
        }
    }
}

/// Adapts a `Canvas` to an embedded-graphics draw target; lit glyph pixels get `color`.
struct GlyphTarget<'a> {
    canvas: &'a mut dyn Canvas,
    color: Color,
}

impl OriginDimensions for GlyphTarget<'_> {
    fn size(&self) -> Size {
        let b = self.canvas.bounds();
        Size::new(b.max_x.max(0) as u32, b.max_y.max(0) as u32)
    }
}

impl DrawTarget for GlyphTarget<'_> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, c) in pixels {
            if c.is_on() {
                self.canvas.set_pixel(p.x, p.y, self.color);
            }
        }
        Ok(())
    }
}
