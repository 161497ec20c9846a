//! Error type for quantization.

use std::fmt;

use thiserror::Error;

/// Which input dimension was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    GridSize,
    ImageWidth,
    ImageHeight,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Dimension::GridSize => "grid size",
            Dimension::ImageWidth => "image width",
            Dimension::ImageHeight => "image height",
        })
    }
}

/// Error returned by [`quantize`](crate::quantize()).
///
/// The core never retries and never returns a partial grid: an invocation
/// either yields a complete [`BeadGrid`](crate::BeadGrid) or one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantizeError {
    /// Grid size or image dimension is zero.
    #[error("invalid {dimension}: {value} (must be at least 1)")]
    InvalidDimension { dimension: Dimension, value: u32 },

    /// The upstream decoder could not produce pixels. Never raised by the
    /// quantizer itself; decoders convert their failures into this variant
    /// so callers see one error type for the whole pipeline.
    #[error("image decode error: {0}")]
    ImageDecode(String),
}

impl QuantizeError {
    pub fn image_decode(err: impl fmt::Display) -> Self {
        QuantizeError::ImageDecode(err.to_string())
    }
}
