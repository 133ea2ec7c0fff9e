// File: crates/chart-core/src/export.rs
// Summary: Encoder interface, JPEG encoder, and scoped file export of a finished canvas.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::buffer::ConvertBuffer;
use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;
use log::{debug, info, warn};

use crate::canvas::PixelCanvas;
use crate::error::ExportError;
use crate::types::JPEG_QUALITY;

/// Serializes a canvas into some compressed image format.
pub trait ImageEncoder {
    fn encode(&self, canvas: &PixelCanvas, out: &mut dyn Write) -> Result<(), ExportError>;
}

/// Baseline JPEG. Alpha is dropped since JPEG has no alpha channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Jpeg {
    pub quality: u8,
}

impl Default for Jpeg {
    fn default() -> Self {
        Self { quality: JPEG_QUALITY }
    }
}

impl ImageEncoder for Jpeg {
    fn encode(&self, canvas: &PixelCanvas, out: &mut dyn Write) -> Result<(), ExportError> {
        let rgb: RgbImage = canvas.as_image().convert();
        let mut encoder = JpegEncoder::new_with_quality(out, self.quality);
        encoder.encode_image(&rgb)?;
        Ok(())
    }
}

/// Encode `canvas` into memory.
pub fn encode_to_bytes<E: ImageEncoder + ?Sized>(canvas: &PixelCanvas, encoder: &E) -> Result<Vec<u8>, ExportError> {
    let mut buf = Vec::new();
    encoder.encode(canvas, &mut buf)?;
    debug!("encoded {}x{} canvas into {} bytes", canvas.width(), canvas.height(), buf.len());
    Ok(buf)
}

/// Encode `canvas` and write it to `path`, replacing any existing file.
///
/// Encoding happens before the file is opened, so an encoder failure leaves the
/// filesystem untouched. A failed write removes the partial file.
pub fn write_to_file<E: ImageEncoder + ?Sized>(
    canvas: &PixelCanvas,
    encoder: &E,
    path: impl AsRef<Path>,
) -> Result<(), ExportError> {
    let path = path.as_ref();
    let bytes = encode_to_bytes(canvas, encoder)?;

    let file = File::create(path).map_err(|source| ExportError::Create { path: path.to_path_buf(), source })?;
    let mut writer = BufWriter::new(file);
    let written = writer.write_all(&bytes).and_then(|()| writer.flush());
    drop(writer);

    if let Err(source) = written {
        if let Err(e) = std::fs::remove_file(path) {
            warn!("could not remove partial file {}: {e}", path.display());
        }
        return Err(ExportError::Write { path: path.to_path_buf(), source });
    }
    info!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}
