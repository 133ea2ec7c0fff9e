// File: crates/chart-core/src/chart.rs
// Summary: Chart struct, render options, and the fixed-order rendering pipeline to a JPEG.

use std::path::Path;

use log::debug;

use crate::axis::AxisLayout;
use crate::canvas::{Canvas, PixelCanvas};
use crate::error::{ChartError, ConfigError};
use crate::export::{self, Jpeg};
use crate::geometry::DataPoint;
use crate::labels::LabelPlacer;
use crate::raster::draw_polyline;
use crate::scale::CoordinateMapper;
use crate::text::{BitmapFont, TextRenderer};
use crate::theme::Theme;
use crate::types::{HEIGHT, JPEG_QUALITY, LABEL_PADDING, MARGIN, SCALING_FACTOR, TITLE_PADDING, WIDTH};

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub margin: i32,
    pub scaling_factor: i32,
    pub label_padding: i32,
    pub title_padding: i32,
    pub jpeg_quality: u8,
    /// Tick labels and title. Off gives output independent of the font.
    pub draw_labels: bool,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            margin: MARGIN,
            scaling_factor: SCALING_FACTOR,
            label_padding: LABEL_PADDING,
            title_padding: TITLE_PADDING,
            jpeg_quality: JPEG_QUALITY,
            draw_labels: true,
            theme: Theme::classic(),
        }
    }
}

impl RenderOptions {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_layout(mut self, margin: i32, scaling_factor: i32) -> Self {
        self.margin = margin;
        self.scaling_factor = scaling_factor;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyCanvas { width: self.width, height: self.height });
        }
        for side in [self.width, self.height] {
            if i32::try_from(side).is_err() {
                return Err(ConfigError::CanvasTooLarge(side));
            }
        }
        if self.scaling_factor <= 0 {
            return Err(ConfigError::ScalingFactor(self.scaling_factor));
        }
        if self.margin < 0 {
            return Err(ConfigError::NegativeMargin(self.margin));
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(ConfigError::Quality(self.jpeg_quality));
        }
        Ok(())
    }

    pub fn mapper(&self) -> CoordinateMapper {
        CoordinateMapper::new(self.margin)
    }

    pub fn axis_layout(&self) -> AxisLayout {
        AxisLayout::new(self.margin, self.scaling_factor)
    }

    pub fn label_placer(&self) -> LabelPlacer {
        LabelPlacer::new(self.margin, self.scaling_factor, self.label_padding, self.title_padding)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Chart {
    pub title: String,
    pub points: Vec<DataPoint>,
}

impl Chart {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), points: Vec::new() }
    }

    pub fn with_points<P: Into<DataPoint>>(mut self, points: impl IntoIterator<Item = P>) -> Self {
        self.points.extend(points.into_iter().map(Into::into));
        self
    }

    pub fn add_point(&mut self, point: impl Into<DataPoint>) {
        self.points.push(point.into());
    }

    /// Draw the chart onto `canvas` in the fixed order: background, axes, pegs,
    /// horizontal labels, vertical labels, title, then the data polyline.
    ///
    /// `opts` must already be valid; see `RenderOptions::validate`.
    pub fn draw(&self, canvas: &mut dyn Canvas, opts: &RenderOptions, text: &dyn TextRenderer) {
        let bounds = canvas.bounds();
        let axes = opts.axis_layout();
        let placer = opts.label_placer();
        let theme = &opts.theme;

        canvas.fill(theme.background);

        for p in axes.vertical_axis(bounds).chain(axes.horizontal_axis(bounds)) {
            canvas.set_pixel(p.x, p.y, theme.axis_line);
        }
        for p in axes.vertical_peg_pixels(bounds).chain(axes.horizontal_peg_pixels(bounds)) {
            canvas.set_pixel(p.x, p.y, theme.peg);
        }
        debug!(
            "axis cutoffs: x={} y={}",
            axes.cutoff(bounds.max_x),
            axes.cutoff(bounds.max_y)
        );

        if opts.draw_labels {
            let horizontal = placer.horizontal_labels(&axes, bounds);
            let vertical = placer.vertical_labels(&axes, bounds, |s| text.measure_width(s));
            debug!("placing {} horizontal and {} vertical labels", horizontal.len(), vertical.len());
            for label in horizontal.iter().chain(&vertical) {
                text.draw_string(canvas, label.anchor, &label.text, theme.label);
            }

            let anchor = placer.title_anchor(bounds, text.measure_width(&self.title));
            text.draw_string(canvas, anchor, &self.title, theme.title);
        }

        let pixels = opts.mapper().map_all(&self.points, bounds);
        draw_polyline(canvas, theme.line_stroke, &pixels);
    }

    /// Render into a fresh canvas using the built-in bitmap font.
    pub fn render(&self, opts: &RenderOptions) -> Result<PixelCanvas, ConfigError> {
        self.render_with(opts, &BitmapFont::default())
    }

    pub fn render_with(&self, opts: &RenderOptions, text: &dyn TextRenderer) -> Result<PixelCanvas, ConfigError> {
        opts.validate()?;
        let mut canvas = PixelCanvas::new(opts.width, opts.height);
        self.draw(&mut canvas, opts, text);
        if canvas.clipped_writes() > 0 {
            debug!("{} pixel writes fell outside the canvas and were clipped", canvas.clipped_writes());
        }
        Ok(canvas)
    }

    /// Render the chart to a JPEG at `output_path`, overwriting it.
    pub fn render_to_jpeg(&self, opts: &RenderOptions, output_path: impl AsRef<Path>) -> Result<(), ChartError> {
        let canvas = self.render(opts)?;
        export::write_to_file(&canvas, &Jpeg { quality: opts.jpeg_quality }, output_path)?;
        Ok(())
    }

    pub fn render_to_jpeg_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, ChartError> {
        let canvas = self.render(opts)?;
        Ok(export::encode_to_bytes(&canvas, &Jpeg { quality: opts.jpeg_quality })?)
    }
}
