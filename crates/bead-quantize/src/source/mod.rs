//! Pixel sources
//!
//! The quantizer never decodes images itself. Callers hand it anything that
//! implements [`PixelSource`]: a width, a height and random access to RGBA
//! samples. [`RgbaImage`] is the owned-buffer implementation that decoders
//! produce.

use thiserror::Error;

use crate::color::PixelSample;

/// Random access to a decoded image.
///
/// `Sync` is required because rows may be quantized in parallel, all
/// reading the same source.
pub trait PixelSource: Sync {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// The sample at `(x, y)`. Callers only ask for in-bounds coordinates.
    fn pixel(&self, x: u32, y: u32) -> PixelSample;
}

/// Error building an [`RgbaImage`] from raw bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("RGBA buffer has {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
    #[error("image dimensions {width}x{height} overflow the address space")]
    TooLarge { width: u32, height: u32 },
}

/// An owned, row-major RGBA8 image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbaImage {
    /// Wrap a row-major RGBA8 buffer.
    ///
    /// # Errors
    ///
    /// [`SourceError::BufferSize`] if `data.len() != width * height * 4`.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, SourceError> {
        let expected = buffer_len(width, height)?;
        if data.len() != expected {
            return Err(SourceError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build an image by evaluating `f` for every pixel in row-major order.
    ///
    /// ```
    /// use bead_quantize::{PixelSample, PixelSource, RgbaImage};
    ///
    /// let image = RgbaImage::from_fn(2, 1, |x, _| PixelSample::new(x as u8, 0, 0, 255)).unwrap();
    /// assert_eq!(image.pixel(1, 0).r, 1);
    /// ```
    pub fn from_fn(
        width: u32,
        height: u32,
        mut f: impl FnMut(u32, u32) -> PixelSample,
    ) -> Result<Self, SourceError> {
        let mut data = Vec::with_capacity(buffer_len(width, height)?);
        for y in 0..height {
            for x in 0..width {
                let p = f(x, y);
                data.extend_from_slice(&[p.r, p.g, p.b, p.a]);
            }
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// An image where every pixel is `sample`.
    pub fn filled(width: u32, height: u32, sample: PixelSample) -> Result<Self, SourceError> {
        Self::from_fn(width, height, |_, _| sample)
    }

    /// The raw RGBA bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

impl PixelSource for RgbaImage {
    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn pixel(&self, x: u32, y: u32) -> PixelSample {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        PixelSample::new(
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        )
    }
}

fn buffer_len(width: u32, height: u32) -> Result<usize, SourceError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or(SourceError::TooLarge { width, height })
}
