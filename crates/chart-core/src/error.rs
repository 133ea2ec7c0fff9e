// File: crates/chart-core/src/error.rs
// Summary: Error types for configuration checks and image export.

use std::path::PathBuf;

use thiserror::Error;

/// Render options that make the layout meaningless.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("canvas must be at least 1x1 pixels, got {width}x{height}")]
    EmptyCanvas { width: u32, height: u32 },
    #[error("canvas side {0} does not fit in pixel coordinates")]
    CanvasTooLarge(u32),
    #[error("scaling factor must be positive, got {0}")]
    ScalingFactor(i32),
    #[error("margin must not be negative, got {0}")]
    NegativeMargin(i32),
    #[error("jpeg quality must be within 1..=100, got {0}")]
    Quality(u8),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create output file {path}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write output file {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("image encoding failed")]
    Encode(#[from] image::ImageError),
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid render options")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Export(#[from] ExportError),
}
