//! PNG decoding into quantizer input.
//!
//! Every PNG flavor is normalized to 8-bit RGBA: palette images and
//! low-bit grayscale are expanded, 16-bit channels are stripped, and
//! `tRNS` transparency becomes a real alpha channel.

use bead_quantize::{QuantizeError, RgbaImage, SourceError};
use std::io::Cursor;
use std::path::Path;
use thiserror::Error;

/// Largest accepted width or height, checked before the pixel buffer is
/// allocated.
pub const MAX_IMAGE_DIMENSION: u32 = 8192;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("PNG decode error: {0}")]
    Png(#[from] png::DecodingError),

    #[error("Image too large: {width}x{height} (max {max}x{max})")]
    TooLarge { width: u32, height: u32, max: u32 },

    #[error("Unsupported PNG color type: {0:?}")]
    UnsupportedColor(png::ColorType),

    #[error("Invalid pixel buffer: {0}")]
    Buffer(#[from] SourceError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<DecodeError> for QuantizeError {
    fn from(e: DecodeError) -> Self {
        QuantizeError::image_decode(e)
    }
}

/// Decode PNG bytes into an RGBA image.
pub fn decode_png(bytes: &[u8]) -> Result<RgbaImage, DecodeError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;

    let (width, height) = {
        let info = reader.info();
        (info.width, info.height)
    };
    if width > MAX_IMAGE_DIMENSION || height > MAX_IMAGE_DIMENSION {
        return Err(DecodeError::TooLarge {
            width,
            height,
            max: MAX_IMAGE_DIMENSION,
        });
    }

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut buf)?;
    buf.truncate(frame.buffer_size());

    let rgba = to_rgba(&buf, frame.color_type)?;
    tracing::debug!(
        width,
        height,
        color_type = ?frame.color_type,
        "Decoded PNG"
    );

    Ok(RgbaImage::new(width, height, rgba)?)
}

/// Read and decode a PNG file.
pub fn load_png(path: impl AsRef<Path>) -> Result<RgbaImage, DecodeError> {
    let bytes = std::fs::read(path.as_ref())?;
    decode_png(&bytes)
}

/// Widen 8-bit samples of any expanded color type to RGBA.
fn to_rgba(data: &[u8], color_type: png::ColorType) -> Result<Vec<u8>, DecodeError> {
    let rgba = match color_type {
        png::ColorType::Rgba => data.to_vec(),
        png::ColorType::Rgb => data
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect(),
        png::ColorType::GrayscaleAlpha => data
            .chunks_exact(2)
            .flat_map(|p| [p[0], p[0], p[0], p[1]])
            .collect(),
        png::ColorType::Grayscale => data.iter().flat_map(|&v| [v, v, v, 255]).collect(),
        // EXPAND turns indexed data into Rgb/Rgba
        other => return Err(DecodeError::UnsupportedColor(other)),
    };
    Ok(rgba)
}
