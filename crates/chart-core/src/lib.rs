// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the public API for laying out, rasterizing and exporting a line chart.

pub mod axis;
pub mod canvas;
pub mod chart;
pub mod error;
pub mod export;
pub mod geometry;
pub mod labels;
pub mod raster;
pub mod scale;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::AxisLayout;
pub use canvas::{Canvas, PixelCanvas};
pub use chart::{Chart, RenderOptions};
pub use error::{ChartError, ConfigError, ExportError};
pub use export::{ImageEncoder, Jpeg};
pub use geometry::{DataPoint, PixelPoint, Rect};
pub use labels::{LabelPlacer, PlacedLabel};
pub use raster::{draw_line, draw_polyline, LinePixels};
pub use scale::CoordinateMapper;
pub use text::{BitmapFont, TextRenderer};
pub use theme::Theme;
pub use types::Color;
